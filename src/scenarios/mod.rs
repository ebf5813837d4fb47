//! Journey registry.
//!
//! Each scenario is an independent unit: it opens its own session, drives
//! page abstractions strictly sequentially, and closes the session on both
//! success and failure paths. Scenarios never share mutable state.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod orders;
pub mod scrolling;
pub mod subscription;

use futures::future::BoxFuture;
use storefront_session::Driver;

use crate::errors::ScenarioError;
use crate::settings::Settings;

type ScenarioEntry = for<'a> fn(&'a Driver, &'a Settings) -> BoxFuture<'a, Result<(), ScenarioError>>;

/// One registered journey.
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    entry: ScenarioEntry,
}

impl Scenario {
    /// Run the journey in a fresh session.
    pub async fn execute(
        &self,
        driver: &Driver,
        settings: &Settings,
    ) -> Result<(), ScenarioError> {
        (self.entry)(driver, settings).await
    }
}

/// Wrap a `(session, settings)` journey function into a [`Scenario`] that
/// owns its session lifecycle.
macro_rules! scenario {
    ($name:literal, $description:literal, $tags:expr, $journey:path) => {{
        fn entry<'a>(
            driver: &'a Driver,
            settings: &'a Settings,
        ) -> BoxFuture<'a, Result<(), ScenarioError>> {
            Box::pin(async move {
                let session = driver.new_session().await?;
                let result = $journey(&session, settings).await;
                session.close().await;
                result
            })
        }
        Scenario {
            name: $name,
            description: $description,
            tags: $tags,
            entry,
        }
    }};
}

/// All journeys, in suite order.
pub fn all() -> Vec<Scenario> {
    vec![
        scenario!(
            "register-user",
            "Register a fresh account and delete it",
            &["auth", "smoke"],
            auth::register_and_delete
        ),
        scenario!(
            "login-valid",
            "Login with correct email and password",
            &["auth", "smoke"],
            auth::login_valid
        ),
        scenario!(
            "login-invalid",
            "Login with incorrect credentials shows the error line",
            &["auth"],
            auth::login_invalid
        ),
        scenario!(
            "logout",
            "Logout lands back on the login page",
            &["auth"],
            auth::logout
        ),
        scenario!(
            "signup-existing-email",
            "Signup with an already-registered email shows the error line",
            &["auth"],
            auth::signup_existing_email
        ),
        scenario!(
            "contact-form",
            "Submit the contact form with a file upload",
            &["contact"],
            contact::contact_form
        ),
        scenario!(
            "test-cases-page",
            "The test-cases page is reachable from the header",
            &["navigation"],
            contact::test_cases_page
        ),
        scenario!(
            "products-and-detail",
            "Catalog renders and the first product detail shows all sections",
            &["catalog", "smoke"],
            catalog::products_and_detail
        ),
        scenario!(
            "product-search",
            "Substring search matches, zero-match search is empty",
            &["catalog", "smoke"],
            catalog::product_search
        ),
        scenario!(
            "subscription-home",
            "Footer subscription on the home page",
            &["subscription"],
            subscription::home_subscription
        ),
        scenario!(
            "subscription-cart",
            "Footer subscription on the cart page",
            &["subscription"],
            subscription::cart_subscription
        ),
        scenario!(
            "cart-add-two",
            "Adding two products yields a two-row cart",
            &["cart", "smoke"],
            cart::add_two_products
        ),
        scenario!(
            "cart-quantity",
            "Quantity set on the detail page is echoed in the cart row",
            &["cart"],
            cart::quantity_in_cart
        ),
        scenario!(
            "order-register-while-checkout",
            "Register mid-checkout, pay, and delete the account",
            &["orders"],
            orders::register_while_checkout
        ),
        scenario!(
            "order-register-before-checkout",
            "Register first, then order and pay",
            &["orders"],
            orders::register_before_checkout
        ),
        scenario!(
            "order-login-before-checkout",
            "Login with an existing account, then order and pay",
            &["orders"],
            orders::login_before_checkout
        ),
        scenario!(
            "cart-remove",
            "Removing the only product returns the cart to empty",
            &["cart"],
            cart::remove_product
        ),
        scenario!(
            "category-shelf",
            "Women > Dress category shelf renders with its title",
            &["catalog"],
            catalog::category_shelf
        ),
        scenario!(
            "brand-shelf",
            "Polo brand shelf renders with its title",
            &["catalog"],
            catalog::brand_shelf
        ),
        scenario!(
            "search-cart-after-login",
            "Cart filled from search results survives a login",
            &["cart", "auth"],
            cart::search_cart_after_login
        ),
        scenario!(
            "product-review",
            "Submitting a review shows the thank-you flash",
            &["catalog"],
            catalog::product_review
        ),
        scenario!(
            "recommended-items",
            "Add to cart from the recommended carousel",
            &["cart"],
            cart::recommended_items
        ),
        scenario!(
            "checkout-address",
            "Checkout echoes the signup address; billing equals delivery",
            &["orders", "smoke"],
            orders::checkout_address_match
        ),
        scenario!(
            "invoice-download",
            "Invoice downloads to disk after a purchase",
            &["orders"],
            orders::invoice_download
        ),
        scenario!(
            "scroll-up-arrow",
            "Scroll down, then back up via the arrow button",
            &["navigation"],
            scrolling::scroll_up_with_arrow
        ),
        scenario!(
            "scroll-up-plain",
            "Scroll down, then back up without the arrow button",
            &["navigation"],
            scrolling::scroll_up_without_arrow
        ),
    ]
}

/// Journeys whose name contains `filter` (all of them when absent).
pub fn filtered(filter: Option<&str>) -> Vec<Scenario> {
    match filter {
        None => all(),
        Some(needle) => all()
            .into_iter()
            .filter(|scenario| scenario.name.contains(needle))
            .collect(),
    }
}
