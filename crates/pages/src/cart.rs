//! Shopping cart page.

use std::time::Duration;

use storefront_locator::{primary_click, xpath_literal, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

#[derive(Debug, Clone)]
pub struct CartLocators {
    pub rows: Locator,
    pub proceed_to_checkout: Locator,
    pub empty_marker: Locator,
    pub register_login_link: Locator,
    pub subscription_email: Locator,
    pub subscription_button: Locator,
    pub subscription_success: Locator,
}

impl Default for CartLocators {
    fn default() -> Self {
        Self {
            rows: Locator::css("#cart_info_table tbody tr"),
            proceed_to_checkout: Locator::text("a", "Proceed To Checkout"),
            empty_marker: Locator::css("#empty_cart"),
            register_login_link: Locator::css("p > a[href='/login']"),
            subscription_email: Locator::css("#susbscribe_email"),
            subscription_button: Locator::css("#subscribe"),
            subscription_success: Locator::css("#success-subscribe"),
        }
    }
}

pub struct CartPage<'s> {
    session: &'s Session,
    loc: CartLocators,
    policy: InteractionPolicy,
}

impl<'s> CartPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: CartLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// Number of product rows currently in the cart.
    pub async fn item_count(&self) -> Result<usize, SessionError> {
        self.session.count(&self.loc.rows.selector()).await
    }

    /// Wait until at least one cart row is rendered.
    pub async fn wait_rows(&self) -> Result<(), SessionError> {
        self.session.wait_visible(&self.loc.rows.selector()).await
    }

    pub async fn price_of(&self, product: &str) -> Result<String, SessionError> {
        self.session
            .text(&Self::row_cell(product, "cart_price").selector())
            .await
    }

    /// Quantity cell for the row containing `product`; rendered as a
    /// button, so the cell text is exactly the number.
    pub async fn quantity_of(&self, product: &str) -> Result<String, SessionError> {
        self.session
            .text(&Self::row_cell(product, "cart_quantity").selector())
            .await
    }

    pub async fn total_of(&self, product: &str) -> Result<String, SessionError> {
        self.session
            .text(&Self::row_cell(product, "cart_total_price").selector())
            .await
    }

    /// Remove the row containing `product` via its delete control.
    pub async fn remove(&self, product: &str) -> Result<(), SessionError> {
        let delete = Locator::xpath(format!(
            "{}//td[contains(@class,'cart_delete')]//a",
            Self::row_xpath(product)
        ));
        primary_click(self.session, &delete, &self.policy).await
    }

    /// Wait for the empty-cart marker the site reveals after the last row
    /// is removed.
    pub async fn wait_empty(&self, bound: Duration) -> Result<(), SessionError> {
        self.session
            .wait_visible_within(&self.loc.empty_marker.selector(), bound)
            .await
    }

    pub async fn empty_marker_visible(&self) -> Result<bool, SessionError> {
        self.session
            .is_visible(&self.loc.empty_marker.selector())
            .await
    }

    pub async fn proceed_to_checkout(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.proceed_to_checkout, &self.policy).await
    }

    /// "Register / Login" link inside the checkout modal shown to guests.
    pub async fn click_register_login(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.register_login_link, &self.policy).await
    }

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

    pub async fn scroll_to_bottom(&self) -> Result<(), SessionError> {
        self.session.scroll_to_bottom().await
    }

    fn row_xpath(product: &str) -> String {
        format!(
            "//table[@id='cart_info_table']//tbody/tr[contains(., {})]",
            xpath_literal(product)
        )
    }

    fn row_cell(product: &str, cell_class: &str) -> Locator {
        Locator::xpath(format!(
            "{}//td[contains(@class,'{cell_class}')]",
            Self::row_xpath(product)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lookup_quotes_the_product_name() {
        let xpath = CartPage::row_xpath("Blue Top");
        assert!(xpath.contains("contains(., 'Blue Top')"));
    }

    #[test]
    fn row_cells_scope_to_the_matching_row() {
        let cell = CartPage::row_cell("Blue Top", "cart_quantity");
        let raw = cell.selector().raw().to_string();
        assert!(raw.contains("cart_info_table"));
        assert!(raw.contains("cart_quantity"));
    }
}
