//! Scroll behavior journeys.

use std::time::Duration;

use storefront_pages::HomePage;
use storefront_session::Session;
use tokio::time::{sleep, Instant};

use crate::errors::{ensure, ScenarioError};
use crate::settings::Settings;

/// The arrow-driven scroll animates; poll the viewport check briefly
/// instead of sampling once.
async fn slider_reaches_viewport(home: &HomePage<'_>) -> Result<bool, ScenarioError> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if home.slider_in_viewport().await? {
            return Ok(true);
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
        sleep(Duration::from_millis(250)).await;
    }
}

pub async fn scroll_up_with_arrow(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.scroll_to_bottom().await?;
    ensure(
        home.subscription_heading_in_viewport().await?,
        "subscription heading",
        "expected the footer heading in view after scrolling down",
    )?;

    home.click_scroll_up_arrow().await?;
    ensure(
        slider_reaches_viewport(&home).await?,
        "carousel after arrow scroll",
        "expected the top carousel back in view",
    )
}

pub async fn scroll_up_without_arrow(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.scroll_to_bottom().await?;
    ensure(
        home.subscription_heading_in_viewport().await?,
        "subscription heading",
        "expected the footer heading in view after scrolling down",
    )?;

    home.scroll_to_top().await?;
    ensure(
        slider_reaches_viewport(&home).await?,
        "carousel after plain scroll",
        "expected the top carousel back in view",
    )
}
