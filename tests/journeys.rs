//! Live journeys against the demo site.
//!
//! These need a Chrome/Chromium binary and network access, so they are
//! ignored by default. Run them with `cargo test --test journeys -- --ignored`,
//! optionally pointing `STOREFRONT_CHROME` at the browser binary.

use storefront_e2e::scenarios;
use storefront_e2e::settings::Settings;
use storefront_session::Driver;

async fn run_journey(name: &str) {
    let settings = Settings::load(None).expect("settings");
    let driver = Driver::launch(settings.driver.clone())
        .await
        .expect("browser launch");

    let all = scenarios::all();
    let scenario = all
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("unknown journey '{name}'"));

    let outcome = scenario.execute(&driver, &settings).await;
    driver.shutdown().await;
    if let Err(err) = outcome {
        panic!("journey '{name}' failed: {err}");
    }
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn register_user_round_trip() {
    run_journey("register-user").await;
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn login_with_fresh_credentials() {
    run_journey("login-valid").await;
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn cart_add_and_remove_round_trip() {
    run_journey("cart-add-two").await;
    run_journey("cart-remove").await;
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn search_yields_matching_results() {
    run_journey("product-search").await;
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn checkout_echoes_signup_address() {
    run_journey("checkout-address").await;
}

#[tokio::test]
#[ignore = "requires a Chrome binary and live network access"]
async fn full_order_with_synthetic_card() {
    run_journey("order-register-before-checkout").await;
}
