//! Account-created and account-deleted confirmation pages.

use std::time::Duration;

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

pub struct AccountCreatedPage<'s> {
    session: &'s Session,
    header: Locator,
    continue_button: Locator,
    policy: InteractionPolicy,
}

impl<'s> AccountCreatedPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            header: Locator::css("h2[data-qa='account-created']"),
            continue_button: Locator::css("a[data-qa='continue-button']"),
            policy: InteractionPolicy::default(),
        }
    }

    /// "Account Created!" header text, waiting up to `bound`.
    pub async fn header_within(&self, bound: Duration) -> Result<String, SessionError> {
        self.session.text_within(&self.header.selector(), bound).await
    }

    pub async fn header_visible(&self) -> Result<bool, SessionError> {
        self.session.is_visible(&self.header.selector()).await
    }

    pub async fn click_continue(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.continue_button, &self.policy).await
    }
}

pub struct AccountDeletedPage<'s> {
    session: &'s Session,
    header: Locator,
    continue_button: Locator,
    policy: InteractionPolicy,
}

impl<'s> AccountDeletedPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            header: Locator::css("h2[data-qa='account-deleted']"),
            continue_button: Locator::css("a[data-qa='continue-button']"),
            policy: InteractionPolicy::default(),
        }
    }

    /// "Account Deleted!" header text, waiting up to `bound`.
    pub async fn header_within(&self, bound: Duration) -> Result<String, SessionError> {
        self.session.text_within(&self.header.selector(), bound).await
    }

    pub async fn click_continue(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.continue_button, &self.policy).await
    }
}
