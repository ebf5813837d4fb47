//! Catalog, search, category/brand and review journeys.

use storefront_pages::{HomePage, ProductsPage};
use storefront_session::Session;
use storefront_synthetic::synthetic_user;

use crate::errors::{ensure, ensure_contains, ensure_contains_ci, ensure_count, ScenarioError};
use crate::settings::Settings;

/// Catalog page renders; first product detail shows every section.
pub async fn products_and_detail(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_products().await?;
    ensure_contains(&home.current_url().await?, "/products", "catalog URL")?;

    let catalog = ProductsPage::new(session);
    ensure_contains_ci(&catalog.catalog_title().await?, "All Products", "catalog title")?;
    catalog.open_first_product().await?;
    ensure_contains(&home.current_url().await?, "/product_details", "detail URL")?;

    let detail = ProductsPage::new(session);
    let sections = detail.detail_sections().await?;
    ensure(
        sections.all_visible(),
        "product detail sections",
        "name/category/price/availability/condition/brand must all render",
    )
}

/// Positive search yields a case-insensitive name match; a zero-match
/// search yields an empty shelf.
pub async fn product_search(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let term = "Top";

    let home = HomePage::new(session);
    home.open().await?;
    home.click_products().await?;

    ProductsPage::new(session).search(term).await?;
    let results = ProductsPage::new(session);
    ensure_contains_ci(&results.catalog_title().await?, "Searched Products", "results title")?;

    let names = results.result_names().await?;
    ensure(!names.is_empty(), "search results", "expected a non-empty result set")?;
    ensure(
        names
            .iter()
            .any(|name| name.to_lowercase().contains(&term.to_lowercase())),
        "search match",
        "expected at least one result name to contain the search term",
    )?;

    results.search("zygomorphic widget").await?;
    let empty = ProductsPage::new(session);
    ensure_count(empty.result_count().await?, 0, "zero-match result set")
}

/// Women > Dress category shelf.
pub async fn category_shelf(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;

    let catalog = ProductsPage::new(session);
    ensure(
        catalog.category_sidebar_visible().await?,
        "category sidebar",
        "sidebar did not render",
    )?;
    catalog.open_women_dress_category().await?;

    let shelf = ProductsPage::new(session);
    ensure_contains_ci(
        &shelf.catalog_title().await?,
        "Women - Dress Products",
        "category shelf title",
    )
}

/// Polo brand shelf.
pub async fn brand_shelf(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_products().await?;

    let catalog = ProductsPage::new(session);
    ensure(
        catalog.brands_section_visible().await?,
        "brands section",
        "brand shelf did not render",
    )?;
    catalog.open_polo_brand().await?;

    let shelf = ProductsPage::new(session);
    ensure_contains_ci(
        &shelf.catalog_title().await?,
        "Brand - Polo Products",
        "brand shelf title",
    )
}

/// Review submission shows the thank-you flash.
pub async fn product_review(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_products().await?;
    ProductsPage::new(session).open_first_product().await?;

    let detail = ProductsPage::new(session);
    let reviewer = synthetic_user();
    detail
        .submit_review(
            &reviewer.name,
            &reviewer.email,
            "This is a fantastic product! Highly recommended.",
        )
        .await?;

    ensure_contains(
        &detail.review_success().await?,
        "Thank you for your review.",
        "review flash",
    )
}
