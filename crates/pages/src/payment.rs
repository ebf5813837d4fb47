//! Payment page and the order confirmation that follows it.

use std::path::PathBuf;
use std::time::Duration;

use storefront_locator::{primary_click, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};
use storefront_synthetic::PaymentCard;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PaymentLocators {
    pub name_on_card: Locator,
    pub card_number: Locator,
    pub cvc: Locator,
    pub expiry_month: Locator,
    pub expiry_year: Locator,
    pub pay_and_confirm: Locator,
    pub order_success: Locator,
    pub download_invoice: Locator,
}

impl Default for PaymentLocators {
    fn default() -> Self {
        Self {
            name_on_card: Locator::css("input[data-qa='name-on-card']"),
            card_number: Locator::css("input[data-qa='card-number']"),
            cvc: Locator::css("input[data-qa='cvc']"),
            expiry_month: Locator::css("input[data-qa='expiry-month']"),
            expiry_year: Locator::css("input[data-qa='expiry-year']"),
            pay_and_confirm: Locator::css("button[data-qa='pay-and-confirm-order']"),
            order_success: Locator::css(".col-sm-9 > p"),
            download_invoice: Locator::css(".col-sm-9 > a[href^='/download_invoice/']"),
        }
    }
}

pub struct PaymentPage<'s> {
    session: &'s Session,
    loc: PaymentLocators,
    policy: InteractionPolicy,
}

impl<'s> PaymentPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: PaymentLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// Fill all card fields. The card is synthetic by construction.
    pub async fn fill_card(&self, card: &PaymentCard) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.name_on_card.selector(), &card.name_on_card)
            .await?;
        self.session
            .fill(&self.loc.card_number.selector(), &card.number)
            .await?;
        self.session.fill(&self.loc.cvc.selector(), &card.cvc).await?;
        self.session
            .fill(&self.loc.expiry_month.selector(), &card.expiry_month)
            .await?;
        self.session
            .fill(&self.loc.expiry_year.selector(), &card.expiry_year)
            .await
    }

    pub async fn pay_and_confirm(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.pay_and_confirm, &self.policy).await
    }

    /// Order confirmation line, waiting up to `bound` for the success page.
    pub async fn order_success_within(&self, bound: Duration) -> Result<String, SessionError> {
        self.session
            .text_within(&self.loc.order_success.selector(), bound)
            .await
    }

    /// Click the invoice link and wait for the download to land in the
    /// session's staging directory.
    pub async fn download_invoice(&self, bound: Duration) -> Result<PathBuf, SessionError> {
        primary_click(self.session, &self.loc.download_invoice, &self.policy).await?;
        let path = self.session.wait_for_download(bound).await?;
        debug!(file = %path.display(), "invoice downloaded");
        Ok(path)
    }
}
