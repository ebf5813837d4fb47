//! Home page: global navigation, footer subscription, recommended items.

use std::time::Duration;

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

/// Locator declarations for the home page.
#[derive(Debug, Clone)]
pub struct HomeLocators {
    pub logo: Locator,
    pub signup_login: Locator,
    pub logout: Locator,
    pub delete_account: Locator,
    pub logged_in_as: Locator,
    pub products: Locator,
    pub cart: Locator,
    pub contact_us: Locator,
    pub test_cases: Locator,
    pub subscription_email: Locator,
    pub subscription_button: Locator,
    pub subscription_success: Locator,
    pub subscription_heading: Locator,
    pub recommended_section: Locator,
    pub recommended_add_to_cart: Locator,
    pub scroll_up_arrow: Locator,
    pub slider: Locator,
}

impl Default for HomeLocators {
    fn default() -> Self {
        Self {
            logo: Locator::css("img[alt='Website for automation practice']"),
            signup_login: Locator::css("a[href='/login']"),
            logout: Locator::css("a[href='/logout']"),
            delete_account: Locator::css("a[href='/delete_account']"),
            logged_in_as: Locator::text("a", "Logged in as"),
            products: Locator::css("a[href='/products']"),
            cart: Locator::css("a[href='/view_cart']"),
            contact_us: Locator::css("a[href='/contact_us']"),
            test_cases: Locator::css("a[href='/test_cases']"),
            // The element id carries the site's own typo.
            subscription_email: Locator::css("#susbscribe_email"),
            subscription_button: Locator::css("#subscribe"),
            subscription_success: Locator::css("#success-subscribe"),
            subscription_heading: Locator::text("h2", "Subscription"),
            recommended_section: Locator::css(".recommended_items"),
            recommended_add_to_cart: Locator::css(".recommended_items .add-to-cart"),
            scroll_up_arrow: Locator::css("#scrollUp"),
            slider: Locator::css("#slider"),
        }
    }
}

/// The landing page. Also hosts the header links every other page shares,
/// so scenarios construct a fresh `HomePage` wherever the header is the
/// next thing they touch.
pub struct HomePage<'s> {
    session: &'s Session,
    loc: HomeLocators,
    policy: InteractionPolicy,
}

impl<'s> HomePage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: HomeLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// Navigate to the landing page.
    pub async fn open(&self) -> Result<(), SessionError> {
        self.session.navigate("/").await
    }

    pub async fn title(&self) -> Result<String, SessionError> {
        self.session.title().await
    }

    pub async fn logo_visible(&self) -> Result<bool, SessionError> {
        self.session.is_visible(&self.loc.logo.selector()).await
    }

    pub async fn click_signup_login(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.signup_login, &self.policy).await
    }

    pub async fn click_products(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.products, &self.policy).await
    }

    pub async fn click_cart(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.cart, &self.policy).await
    }

    pub async fn click_contact_us(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.contact_us, &self.policy).await
    }

    pub async fn click_test_cases(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.test_cases, &self.policy).await
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.logout, &self.policy).await
    }

    pub async fn delete_account(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.delete_account, &self.policy).await
    }

    /// Text of the "Logged in as ..." banner, waiting up to `bound`.
    ///
    /// First paint after signup can take tens of seconds on the live site,
    /// so callers pass a generous bound here.
    pub async fn logged_in_banner_within(&self, bound: Duration) -> Result<String, SessionError> {
        self.session
            .text_within(&self.loc.logged_in_as.selector(), bound)
            .await
    }

    /// Fill the footer subscription field and submit.
    pub async fn subscribe(&self, email: &str) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.subscription_email.selector(), email)
            .await?;
        primary_click(self.session, &self.loc.subscription_button, &self.policy).await
    }

    pub async fn subscription_success_text(&self) -> Result<String, SessionError> {
        self.session
            .text(&self.loc.subscription_success.selector())
            .await
    }

    pub async fn recommended_section_visible(&self) -> Result<bool, SessionError> {
        self.session
            .is_visible(&self.loc.recommended_section.selector())
            .await
    }

    /// Scroll the recommended carousel into view and add its first item.
    pub async fn add_recommended_to_cart(&self) -> Result<(), SessionError> {
        self.session
            .scroll_into_view(&self.loc.recommended_section.selector())
            .await?;
        primary_click(self.session, &self.loc.recommended_add_to_cart, &self.policy).await
    }

    pub async fn click_scroll_up_arrow(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.scroll_up_arrow, &self.policy).await
    }

    pub async fn scroll_to_bottom(&self) -> Result<(), SessionError> {
        self.session.scroll_to_bottom().await
    }

    pub async fn scroll_to_top(&self) -> Result<(), SessionError> {
        self.session.scroll_to_top().await
    }

    pub async fn subscription_heading_in_viewport(&self) -> Result<bool, SessionError> {
        self.session
            .in_viewport(&self.loc.subscription_heading.selector())
            .await
    }

    pub async fn slider_in_viewport(&self) -> Result<bool, SessionError> {
        self.session.in_viewport(&self.loc.slider.selector()).await
    }

    pub async fn current_url(&self) -> Result<String, SessionError> {
        self.session.current_url().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locators_keep_the_site_typo() {
        let loc = HomeLocators::default();
        assert_eq!(loc.subscription_email, Locator::css("#susbscribe_email"));
    }

    #[test]
    fn banner_locator_matches_partial_text() {
        let loc = HomeLocators::default();
        assert_eq!(loc.logged_in_as.strategy_name(), "text");
    }
}
