//! Contact form and static-page journeys.

use std::io::Write;

use storefront_locator::Locator;
use storefront_pages::{ContactUsPage, HomePage};
use storefront_session::Session;
use storefront_synthetic::synthetic_user;

use crate::errors::{ensure_contains, ensure_contains_ci, ScenarioError};
use crate::settings::Settings;

/// Fill the contact form, upload a staged fixture, accept the confirm
/// dialog, and read the success flash.
pub async fn contact_form(session: &Session, _settings: &Settings) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_contact_us().await?;

    let contact = ContactUsPage::new(session);
    ensure_contains_ci(&contact.get_in_touch_header().await?, "Get In Touch", "contact header")?;

    let mut fixture = tempfile::NamedTempFile::new()
        .map_err(|err| ScenarioError::Setup(format!("upload fixture: {err}")))?;
    fixture
        .write_all(b"Attachment fixture for the contact form.\n")
        .map_err(|err| ScenarioError::Setup(format!("upload fixture: {err}")))?;

    let user = synthetic_user();
    contact
        .submit_form(
            &user.name,
            &user.email,
            "Customer Support Inquiry",
            "This is a test message for the contact us form.",
            Some(fixture.path()),
        )
        .await?;

    ensure_contains(
        &contact.success_message().await?,
        "Success! Your details have been submitted successfully.",
        "contact success flash",
    )
}

/// The test-cases page is reachable from the header link.
pub async fn test_cases_page(
    session: &Session,
    _settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;
    home.click_test_cases().await?;

    ensure_contains(&home.current_url().await?, "test_cases", "test-cases URL")?;
    // Single heading read; not worth a dedicated page abstraction.
    session
        .wait_visible(&Locator::text("b", "Test Cases").selector())
        .await?;
    Ok(())
}
