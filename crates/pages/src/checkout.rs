//! Checkout review page: address blocks, order comment, place order.

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};

pub struct CheckoutPage<'s> {
    session: &'s Session,
    delivery_address: Locator,
    billing_address: Locator,
    comment: Locator,
    place_order: Locator,
    policy: InteractionPolicy,
}

impl<'s> CheckoutPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            delivery_address: Locator::css("#address_delivery"),
            billing_address: Locator::css("#address_invoice"),
            comment: Locator::css("textarea[name='message']"),
            place_order: Locator::css("a[href='/payment']"),
            policy: InteractionPolicy::default(),
        }
    }

    /// Full delivery address block, one field per line, header included.
    pub async fn delivery_address(&self) -> Result<String, SessionError> {
        self.session.text(&self.delivery_address.selector()).await
    }

    /// Full billing address block, one field per line, header included.
    pub async fn billing_address(&self) -> Result<String, SessionError> {
        self.session.text(&self.billing_address.selector()).await
    }

    pub async fn enter_comment(&self, comment: &str) -> Result<(), SessionError> {
        self.session.fill(&self.comment.selector(), comment).await
    }

    pub async fn place_order(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.place_order, &self.policy).await
    }
}

/// Strip the header line ("YOUR DELIVERY ADDRESS" / "YOUR BILLING ADDRESS")
/// from an address block so the two can be compared field by field.
pub fn address_without_header(block: &str) -> String {
    block
        .lines()
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stripping_keeps_field_lines() {
        let block = "YOUR DELIVERY ADDRESS\nMr. Liam Beck\nCobalt Labs\n12 Ashford Rd";
        assert_eq!(
            address_without_header(block),
            "Mr. Liam Beck\nCobalt Labs\n12 Ashford Rd"
        );
    }

    #[test]
    fn header_stripping_handles_single_line() {
        assert_eq!(address_without_header("YOUR DELIVERY ADDRESS"), "");
    }
}
