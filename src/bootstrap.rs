//! Shared scenario setup: register a synthetic user and reach an
//! authenticated session, or fail closed.

use storefront_locator::DismissChain;
use storefront_pages::{
    AccountCreatedPage, AccountDeletedPage, HomePage, LoginPage, SignupPage,
};
use storefront_session::Session;
use storefront_synthetic::{synthetic_user, SyntheticUser};
use tracing::info;

use crate::errors::{ensure_contains, ensure_contains_ci, ScenarioError};
use crate::settings::Settings;

/// Register a fresh synthetic user starting from the landing page and
/// leave the session authenticated.
///
/// Every step except obstruction dismissal is fatal: a scenario must never
/// proceed with an unauthenticated session. Returns the generated record
/// so the caller can assert against its fields later (address at checkout,
/// name in the banner).
pub async fn register_user(
    session: &Session,
    settings: &Settings,
) -> Result<SyntheticUser, ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_signup_login().await?;
    signup_from_login_page(session, settings).await
}

/// Same as [`register_user`], but assumes the session is already on the
/// signup/login page (e.g. reached through the checkout modal).
pub async fn signup_from_login_page(
    session: &Session,
    settings: &Settings,
) -> Result<SyntheticUser, ScenarioError> {
    let user = synthetic_user();
    info!(email = %user.email, "registering synthetic user");

    let login = LoginPage::new(session);
    let signup_header = login.new_user_signup_header().await?;
    ensure_contains_ci(&signup_header, "New User Signup!", "signup header")?;
    login.signup(&user.name, &user.email).await?;

    let signup = SignupPage::new(session);
    let info_header = signup.account_info_header().await?;
    ensure_contains_ci(&info_header, "Enter Account Information", "account form header")?;
    signup.fill_account_details(&user).await?;

    // Explicit bounded wait on the confirmation, not a fixed sleep.
    let created = AccountCreatedPage::new(session);
    let created_header = created
        .header_within(settings.confirmation_timeout())
        .await?;
    ensure_contains_ci(&created_header, "Account Created", "account created header")?;
    created.click_continue().await?;

    // Transient ads may cover the page after the redirect; best-effort.
    DismissChain::ad_overlays().run(session).await;

    let banner = HomePage::new(session)
        .logged_in_banner_within(settings.banner_timeout())
        .await
        .map_err(|err| ScenarioError::Setup(format!("authenticated banner: {err}")))?;
    ensure_contains(&banner, &user.name, "logged-in banner")?;

    info!(email = %user.email, "authenticated");
    Ok(user)
}

/// Delete the account the session is logged into and confirm the deletion
/// page. Scenarios call this when cleanup is part of the journey.
pub async fn delete_account(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    HomePage::new(session).delete_account().await?;
    let deleted = AccountDeletedPage::new(session);
    let header = deleted
        .header_within(settings.confirmation_timeout())
        .await?;
    ensure_contains_ci(&header, "Account Deleted", "account deleted header")?;
    deleted.click_continue().await?;
    info!("account deleted");
    Ok(())
}
