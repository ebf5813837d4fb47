//! Account-information form shown after the initial signup step.

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};
use storefront_synthetic::{SyntheticUser, Title};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SignupLocators {
    pub account_info_header: Locator,
    pub title_mr: Locator,
    pub title_mrs: Locator,
    pub password: Locator,
    pub birth_day: Locator,
    pub birth_month: Locator,
    pub birth_year: Locator,
    pub newsletter: Locator,
    pub special_offers: Locator,
    pub first_name: Locator,
    pub last_name: Locator,
    pub company: Locator,
    pub address1: Locator,
    pub address2: Locator,
    pub country: Locator,
    pub state: Locator,
    pub city: Locator,
    pub zipcode: Locator,
    pub mobile_number: Locator,
    pub create_account: Locator,
}

impl Default for SignupLocators {
    fn default() -> Self {
        Self {
            account_info_header: Locator::css(".login-form > h2 > b"),
            title_mr: Locator::css("#id_gender1"),
            title_mrs: Locator::css("#id_gender2"),
            password: Locator::css("#password"),
            birth_day: Locator::css("#days"),
            birth_month: Locator::css("#months"),
            birth_year: Locator::css("#years"),
            newsletter: Locator::css("#newsletter"),
            special_offers: Locator::css("#optin"),
            first_name: Locator::css("#first_name"),
            last_name: Locator::css("#last_name"),
            company: Locator::css("#company"),
            address1: Locator::css("#address1"),
            address2: Locator::css("#address2"),
            country: Locator::css("#country"),
            state: Locator::css("#state"),
            city: Locator::css("#city"),
            zipcode: Locator::css("#zipcode"),
            mobile_number: Locator::css("#mobile_number"),
            create_account: Locator::css("button[data-qa='create-account']"),
        }
    }
}

pub struct SignupPage<'s> {
    session: &'s Session,
    loc: SignupLocators,
    policy: InteractionPolicy,
}

impl<'s> SignupPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: SignupLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// "Enter Account Information" header.
    pub async fn account_info_header(&self) -> Result<String, SessionError> {
        self.session
            .text(&self.loc.account_info_header.selector())
            .await
    }

    /// Fill the entire account form from a synthetic record and submit.
    pub async fn fill_account_details(&self, user: &SyntheticUser) -> Result<(), SessionError> {
        debug!(email = %user.email, "filling account form");

        let title_radio = match user.title {
            Title::Mr => &self.loc.title_mr,
            Title::Mrs => &self.loc.title_mrs,
        };
        self.session.check(&title_radio.selector()).await?;
        self.session
            .fill(&self.loc.password.selector(), &user.password)
            .await?;

        // Day and year dropdowns carry numeric values; the month dropdown
        // is matched by its visible label.
        self.session
            .select_value(&self.loc.birth_day.selector(), &user.birth.day)
            .await?;
        self.session
            .select_label(&self.loc.birth_month.selector(), &user.birth.month)
            .await?;
        self.session
            .select_value(&self.loc.birth_year.selector(), &user.birth.year)
            .await?;

        self.session.check(&self.loc.newsletter.selector()).await?;
        self.session
            .check(&self.loc.special_offers.selector())
            .await?;

        self.session
            .fill(&self.loc.first_name.selector(), &user.first_name)
            .await?;
        self.session
            .fill(&self.loc.last_name.selector(), &user.last_name)
            .await?;
        self.session
            .fill(&self.loc.company.selector(), &user.company)
            .await?;
        self.session
            .fill(&self.loc.address1.selector(), &user.address1)
            .await?;
        self.session
            .fill(&self.loc.address2.selector(), &user.address2)
            .await?;
        self.session
            .select_label(&self.loc.country.selector(), &user.country)
            .await?;
        self.session
            .fill(&self.loc.state.selector(), &user.state)
            .await?;
        self.session
            .fill(&self.loc.city.selector(), &user.city)
            .await?;
        self.session
            .fill(&self.loc.zipcode.selector(), &user.zipcode)
            .await?;
        self.session
            .fill(&self.loc.mobile_number.selector(), &user.mobile_number)
            .await?;

        primary_click(self.session, &self.loc.create_account, &self.policy).await
    }
}
