//! Best-effort dismissal of transient obstructions.
//!
//! Third-party ads and success modals may or may not appear depending on
//! timing. The chain tries an ordered list of candidates, each with its own
//! short bound; individual failures are swallowed, only exhaustion is
//! logged, and the caller never fails because of this step.

use std::time::Duration;

use storefront_session::Session;
use tracing::{debug, info};

use crate::types::Locator;

/// One dismissal attempt: a locator and its own short bound.
#[derive(Debug, Clone)]
pub struct DismissCandidate {
    /// Short label for logs.
    pub label: &'static str,
    pub locator: Locator,
    pub timeout: Duration,
}

impl DismissCandidate {
    pub fn new(label: &'static str, locator: Locator, timeout: Duration) -> Self {
        Self {
            label,
            locator,
            timeout,
        }
    }
}

/// Outcome of a dismissal sweep. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissOutcome {
    /// A candidate matched and was clicked away.
    Dismissed { candidate: &'static str },
    /// No candidate appeared within its bound.
    NotPresent,
}

/// Ordered fallback chain over dismissal candidates.
#[derive(Debug, Clone)]
pub struct DismissChain {
    label: &'static str,
    candidates: Vec<DismissCandidate>,
}

impl DismissChain {
    pub fn new(label: &'static str, candidates: Vec<DismissCandidate>) -> Self {
        Self { label, candidates }
    }

    /// The ad-overlay chain used after signup and other full-page loads.
    /// Candidate order mirrors how the overlays stack on the target site:
    /// the dedicated dismiss button first, then generic close affordances.
    pub fn ad_overlays() -> Self {
        let short = Duration::from_secs(2);
        Self::new(
            "ad-overlays",
            vec![
                DismissCandidate::new("dismiss-button", Locator::css("#dismiss-button"), short),
                DismissCandidate::new("id-dismiss", Locator::css("[id*='dismiss']"), short),
                DismissCandidate::new("ad-close", Locator::css(".ad-close"), short),
                DismissCandidate::new(
                    "aria-close",
                    Locator::css("[aria-label*='Close']"),
                    short,
                ),
                DismissCandidate::new("title-close", Locator::css("[title*='Close']"), short),
            ],
        )
    }

    /// Try every candidate in order; stop at the first that clicks away.
    ///
    /// This never returns an error: a scenario must not fail because an ad
    /// did not show up.
    pub async fn run(&self, session: &Session) -> DismissOutcome {
        for candidate in &self.candidates {
            let selector = candidate.locator.selector();
            match session
                .wait_visible_within(&selector, candidate.timeout)
                .await
            {
                Ok(()) => match session.click(&selector).await {
                    Ok(()) => {
                        info!(
                            chain = self.label,
                            candidate = candidate.label,
                            "obstruction dismissed"
                        );
                        return DismissOutcome::Dismissed {
                            candidate: candidate.label,
                        };
                    }
                    Err(err) => {
                        debug!(
                            chain = self.label,
                            candidate = candidate.label,
                            "dismiss click failed: {err}"
                        );
                    }
                },
                Err(err) => {
                    debug!(
                        chain = self.label,
                        candidate = candidate.label,
                        "not present: {err}"
                    );
                }
            }
        }
        info!(chain = self.label, "no obstruction to dismiss");
        DismissOutcome::NotPresent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_chain_tries_the_dedicated_button_first() {
        let chain = DismissChain::ad_overlays();
        assert_eq!(chain.candidates[0].label, "dismiss-button");
        assert!(chain.candidates.len() >= 4);
    }

    #[test]
    fn ad_chain_bounds_are_short() {
        for candidate in &DismissChain::ad_overlays().candidates {
            assert!(candidate.timeout <= Duration::from_secs(3));
        }
    }
}
