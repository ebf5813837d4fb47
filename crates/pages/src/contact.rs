//! Contact-us form, including the upload fixture path.

use std::path::Path;

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

#[derive(Debug, Clone)]
pub struct ContactUsLocators {
    pub get_in_touch_header: Locator,
    pub name: Locator,
    pub email: Locator,
    pub subject: Locator,
    pub message: Locator,
    pub upload_file: Locator,
    pub submit: Locator,
    pub success_flash: Locator,
}

impl Default for ContactUsLocators {
    fn default() -> Self {
        Self {
            get_in_touch_header: Locator::css(".contact-form > .title"),
            name: Locator::css("input[data-qa='name']"),
            email: Locator::css("input[data-qa='email']"),
            subject: Locator::css("input[data-qa='subject']"),
            message: Locator::css("textarea[data-qa='message']"),
            upload_file: Locator::css("input[name='upload_file']"),
            submit: Locator::css("input[data-qa='submit-button']"),
            success_flash: Locator::css(".status.alert.alert-success"),
        }
    }
}

pub struct ContactUsPage<'s> {
    session: &'s Session,
    loc: ContactUsLocators,
    policy: InteractionPolicy,
}

impl<'s> ContactUsPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: ContactUsLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    pub async fn get_in_touch_header(&self) -> Result<String, SessionError> {
        self.session
            .text(&self.loc.get_in_touch_header.selector())
            .await
    }

    /// Fill and submit the form. Submitting raises a JS confirm dialog,
    /// which the session is armed to auto-accept before the click.
    pub async fn submit_form(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        upload: Option<&Path>,
    ) -> Result<(), SessionError> {
        self.session.fill(&self.loc.name.selector(), name).await?;
        self.session.fill(&self.loc.email.selector(), email).await?;
        self.session
            .fill(&self.loc.subject.selector(), subject)
            .await?;
        self.session
            .fill(&self.loc.message.selector(), message)
            .await?;
        if let Some(path) = upload {
            self.session
                .upload_file(&self.loc.upload_file.selector(), path)
                .await?;
        }
        self.session.auto_accept_dialogs().await?;
        primary_click(self.session, &self.loc.submit, &self.policy).await
    }

    pub async fn success_message(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.success_flash.selector()).await
    }
}
