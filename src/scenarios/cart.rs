//! Cart manipulation journeys.

use std::time::Duration;

use storefront_pages::{CartPage, HomePage, LoginPage, ProductsPage};
use storefront_session::Session;

use crate::bootstrap;
use crate::errors::{ensure, ensure_contains_ci, ensure_count, ensure_eq, ScenarioError};
use crate::settings::Settings;

/// Add two grid products; the cart shows exactly two rows.
pub async fn add_two_products(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_products().await?;

    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    ensure_contains_ci(&products.added_modal_title().await?, "Added", "added modal")?;
    products.continue_shopping().await?;

    products.add_to_cart_by_index(1).await?;
    products.view_cart_from_modal().await?;

    let cart = CartPage::new(session);
    cart.wait_rows().await?;
    ensure_count(cart.item_count().await?, 2, "cart rows")
}

/// Quantity 4 set before add-to-cart reads back as exactly "4".
pub async fn quantity_in_cart(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    ProductsPage::new(session).open_first_product().await?;

    let detail = ProductsPage::new(session);
    detail.set_quantity(4).await?;
    detail.add_to_cart_from_detail().await?;
    detail.view_cart_from_modal().await?;

    let cart = CartPage::new(session);
    cart.wait_rows().await?;
    ensure_eq(&cart.quantity_of("Blue Top").await?, "4", "cart quantity cell")
}

/// Add one product, remove it, observe the empty-cart marker.
pub async fn remove_product(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;

    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    products.view_cart_from_modal().await?;

    let cart = CartPage::new(session);
    cart.wait_rows().await?;
    cart.remove("Blue Top").await?;
    cart.wait_empty(Duration::from_secs(10)).await?;
    Ok(())
}

/// Fill the cart from search results; the cart survives a login.
pub async fn search_cart_after_login(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;
    HomePage::new(session).logout().await?;

    HomePage::new(session).click_products().await?;
    ProductsPage::new(session).search("Dress").await?;

    let results = ProductsPage::new(session);
    let found = results.result_count().await?;
    ensure(found > 0, "search results", "expected dress results to fill the cart from")?;
    for index in 0..found {
        results.add_to_cart_by_index(index).await?;
        results.continue_shopping().await?;
    }

    HomePage::new(session).click_cart().await?;
    ensure_count(
        CartPage::new(session).item_count().await?,
        found,
        "cart rows before login",
    )?;

    HomePage::new(session).click_signup_login().await?;
    LoginPage::new(session)
        .login(&user.email, &user.password)
        .await?;

    HomePage::new(session).click_cart().await?;
    ensure_count(
        CartPage::new(session).item_count().await?,
        found,
        "cart rows after login",
    )
}

/// Add to cart from the recommended carousel at the bottom of the page.
pub async fn recommended_items(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.scroll_to_bottom().await?;
    ensure(
        home.recommended_section_visible().await?,
        "recommended section",
        "carousel did not render",
    )?;
    home.add_recommended_to_cart().await?;

    let products = ProductsPage::new(session);
    ensure_contains_ci(&products.added_modal_title().await?, "Added", "added modal")?;
    products.view_cart_from_modal().await?;

    let cart = CartPage::new(session);
    cart.wait_rows().await?;
    ensure_count(cart.item_count().await?, 1, "cart rows")
}
