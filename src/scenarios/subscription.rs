//! Footer subscription journeys.

use storefront_pages::{CartPage, HomePage};
use storefront_session::Session;
use storefront_synthetic::synthetic_user;

use crate::errors::{ensure_contains, ScenarioError};
use crate::settings::Settings;

const SUBSCRIBED_FLASH: &str = "You have been successfully subscribed!";

pub async fn home_subscription(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.scroll_to_bottom().await?;

    let subscriber = synthetic_user();
    home.subscribe(&subscriber.email).await?;
    ensure_contains(
        &home.subscription_success_text().await?,
        SUBSCRIBED_FLASH,
        "subscription flash",
    )
}

pub async fn cart_subscription(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_cart().await?;

    let cart = CartPage::new(session);
    cart.scroll_to_bottom().await?;

    let subscriber = synthetic_user();
    cart.subscribe(&subscriber.email).await?;
    ensure_contains(
        &cart.subscription_success_text().await?,
        SUBSCRIBED_FLASH,
        "subscription flash",
    )
}
