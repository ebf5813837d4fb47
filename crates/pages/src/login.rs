//! Login / signup entry page.

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

#[derive(Debug, Clone)]
pub struct LoginLocators {
    pub signup_name: Locator,
    pub signup_email: Locator,
    pub signup_button: Locator,
    pub new_user_signup_header: Locator,
    pub signup_error: Locator,
    pub login_email: Locator,
    pub login_password: Locator,
    pub login_button: Locator,
    pub login_header: Locator,
    pub login_error: Locator,
}

impl Default for LoginLocators {
    fn default() -> Self {
        Self {
            signup_name: Locator::css("input[data-qa='signup-name']"),
            signup_email: Locator::css("input[data-qa='signup-email']"),
            signup_button: Locator::css("button[data-qa='signup-button']"),
            new_user_signup_header: Locator::css(".signup-form > h2"),
            signup_error: Locator::css(".signup-form form p"),
            login_email: Locator::css("input[data-qa='login-email']"),
            login_password: Locator::css("input[data-qa='login-password']"),
            login_button: Locator::css("button[data-qa='login-button']"),
            login_header: Locator::css(".login-form > h2"),
            login_error: Locator::css(".login-form form p"),
        }
    }
}

pub struct LoginPage<'s> {
    session: &'s Session,
    loc: LoginLocators,
    policy: InteractionPolicy,
}

impl<'s> LoginPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: LoginLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// Start a signup with name and email; lands on the account form.
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.signup_name.selector(), name)
            .await?;
        self.session
            .fill(&self.loc.signup_email.selector(), email)
            .await?;
        primary_click(self.session, &self.loc.signup_button, &self.policy).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.login_email.selector(), email)
            .await?;
        self.session
            .fill(&self.loc.login_password.selector(), password)
            .await?;
        primary_click(self.session, &self.loc.login_button, &self.policy).await
    }

    pub async fn new_user_signup_header(&self) -> Result<String, SessionError> {
        self.session
            .text(&self.loc.new_user_signup_header.selector())
            .await
    }

    pub async fn login_header(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.login_header.selector()).await
    }

    /// Error line under the login form ("Your email or password is incorrect!").
    pub async fn login_error(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.login_error.selector()).await
    }

    /// Error line under the signup form ("Email Address already exist!").
    pub async fn signup_error(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.signup_error.selector()).await
    }
}
