//! Primary-action interaction policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_session::{Session, SessionError};
use tracing::{debug, warn};

use crate::types::Locator;

/// Policy for actions on a scenario's main path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionPolicy {
    /// Bound for the visible+enabled precheck.
    pub wait_ms: u64,
    /// Whether a blocked click may fall back to direct DOM dispatch once.
    pub forced_fallback: bool,
}

impl Default for InteractionPolicy {
    fn default() -> Self {
        Self {
            wait_ms: 10_000,
            forced_fallback: true,
        }
    }
}

impl InteractionPolicy {
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}

/// Click an element on the scenario's main path.
///
/// Waits for visible+enabled, scrolls into view, clicks with real input
/// events; a blocked click is retried once via forced DOM dispatch. The
/// fallback's failure propagates: this step gates the rest of the journey.
pub async fn primary_click(
    session: &Session,
    locator: &Locator,
    policy: &InteractionPolicy,
) -> Result<(), SessionError> {
    let selector = locator.selector();
    session
        .wait_interactable_within(&selector, policy.wait())
        .await?;
    if let Err(err) = session.scroll_into_view(&selector).await {
        // The click itself scrolls again; a failed pre-scroll is not fatal.
        debug!(%locator, "pre-scroll failed: {err}");
    }
    match session.click(&selector).await {
        Ok(()) => Ok(()),
        Err(SessionError::InteractionBlocked(reason)) if policy.forced_fallback => {
            warn!(%locator, %reason, "click blocked, dispatching forced fallback");
            session.click_forced(&selector).await
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_the_forced_fallback() {
        let policy = InteractionPolicy::default();
        assert!(policy.forced_fallback);
        assert_eq!(policy.wait(), Duration::from_secs(10));
    }

    #[test]
    fn policy_round_trips_through_json() {
        let policy = InteractionPolicy {
            wait_ms: 2_500,
            forced_fallback: false,
        };
        let json = serde_json::to_string(&policy).unwrap();
        let back: InteractionPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wait_ms, 2_500);
        assert!(!back.forced_fallback);
    }
}
