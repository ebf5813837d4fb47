//! Registration, login and logout journeys.

use storefront_pages::{HomePage, LoginPage};
use storefront_session::Session;
use storefront_synthetic::synthetic_user;
use tracing::info;

use crate::bootstrap;
use crate::errors::{ensure, ensure_contains, ensure_contains_ci, ScenarioError};
use crate::settings::Settings;

/// Register a fresh account, confirm the authenticated banner, delete it.
pub async fn register_and_delete(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    ensure(
        home.logo_visible().await?,
        "site logo",
        "landing page did not render",
    )?;
    home.click_signup_login().await?;

    let user = bootstrap::signup_from_login_page(session, settings).await?;
    info!(email = %user.email, "registered, deleting");
    bootstrap::delete_account(session, settings).await
}

/// Register, log out, then log back in with the same credentials.
pub async fn login_valid(session: &Session, settings: &Settings) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;
    HomePage::new(session).logout().await?;

    let home = HomePage::new(session);
    home.open().await?;
    ensure(
        home.logo_visible().await?,
        "site logo",
        "landing page did not render",
    )?;
    home.click_signup_login().await?;

    let login = LoginPage::new(session);
    ensure_contains_ci(&login.login_header().await?, "Login to your account", "login header")?;
    login.login(&user.email, &user.password).await?;

    let banner = HomePage::new(session)
        .logged_in_banner_within(settings.banner_timeout())
        .await?;
    ensure_contains(&banner, &user.name, "logged-in banner")?;

    bootstrap::delete_account(session, settings).await
}

/// Wrong credentials surface the error line and nothing else.
pub async fn login_invalid(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_signup_login().await?;

    let login = LoginPage::new(session);
    ensure_contains_ci(&login.login_header().await?, "Login to your account", "login header")?;

    // Never-registered credentials.
    let stranger = synthetic_user();
    login.login(&stranger.email, &stranger.password).await?;

    ensure_contains_ci(
        &login.login_error().await?,
        "Your email or password is incorrect!",
        "login error line",
    )
}

/// Logout drops the session back on the login page.
pub async fn logout(session: &Session, settings: &Settings) -> Result<(), ScenarioError> {
    bootstrap::register_user(session, settings).await?;

    let home = HomePage::new(session);
    home.logout().await?;

    ensure_contains(&home.current_url().await?, "/login", "post-logout URL")?;
    ensure_contains_ci(
        &LoginPage::new(session).login_header().await?,
        "Login to your account",
        "login header",
    )
}

/// A second signup with an already-registered email is rejected.
pub async fn signup_existing_email(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let existing = bootstrap::register_user(session, settings).await?;
    HomePage::new(session).logout().await?;

    HomePage::new(session).click_signup_login().await?;
    let login = LoginPage::new(session);
    let imposter = synthetic_user();
    login.signup(&imposter.name, &existing.email).await?;

    ensure_contains_ci(
        &login.signup_error().await?,
        "Email Address already exist!",
        "signup error line",
    )
}
