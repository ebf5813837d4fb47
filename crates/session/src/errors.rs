//! Error types for the session layer.

use thiserror::Error;

/// Session error enumeration.
///
/// Scenario-local by design: a failed wait or interaction terminates the
/// current scenario only. Best-effort callers decide whether to swallow.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Element (or dropdown option) did not exist in the page.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Element existed but did not reach the required state within the bound.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Element present but not interactable (overlapped, disabled).
    #[error("Interaction blocked: {0}")]
    InteractionBlocked(String),

    /// Navigation failed or did not settle within the bound.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Driver transport failure.
    #[error("CDP I/O error: {0}")]
    CdpIo(String),

    /// Invariant violation inside the session layer itself.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Whether retrying the same step can plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SessionError::Timeout(_)
                | SessionError::InteractionBlocked(_)
                | SessionError::CdpIo(_)
        )
    }

    /// Error severity (0=low, 1=medium, 2=high, 3=critical).
    pub fn severity(&self) -> u8 {
        match self {
            SessionError::Internal(_) => 3,
            SessionError::Navigation(_) | SessionError::CdpIo(_) => 2,
            SessionError::Timeout(_) | SessionError::InteractionBlocked(_) => 1,
            SessionError::ElementNotFound(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(SessionError::Timeout("t".into()).is_retryable());
        assert!(SessionError::InteractionBlocked("b".into()).is_retryable());
        assert!(!SessionError::ElementNotFound("e".into()).is_retryable());
        assert!(!SessionError::Internal("i".into()).is_retryable());
    }

    #[test]
    fn severity_ordering() {
        assert!(
            SessionError::Internal("i".into()).severity()
                > SessionError::Navigation("n".into()).severity()
        );
        assert!(
            SessionError::Navigation("n".into()).severity()
                > SessionError::Timeout("t".into()).severity()
        );
    }
}
