//! Scenario-level errors and assertion helpers.

use storefront_session::SessionError;
use thiserror::Error;

/// Why a scenario failed. Failures are scenario-local: one journey's
/// error never blocks or corrupts an independent journey.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A driver interaction failed (wait, click, read).
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Observed state did not match the expectation. Never retried.
    #[error("Assertion failed at '{step}': {detail}")]
    Assertion { step: String, detail: String },

    /// The shared bootstrap could not establish its precondition.
    #[error("Setup failed: {0}")]
    Setup(String),
}

impl ScenarioError {
    pub fn assertion(step: &str, detail: impl Into<String>) -> Self {
        ScenarioError::Assertion {
            step: step.to_string(),
            detail: detail.into(),
        }
    }
}

/// Fail the scenario unless `condition` holds.
pub fn ensure(condition: bool, step: &str, detail: &str) -> Result<(), ScenarioError> {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::assertion(step, detail))
    }
}

/// Case-sensitive containment check, for generated values like names.
pub fn ensure_contains(haystack: &str, needle: &str, step: &str) -> Result<(), ScenarioError> {
    ensure(
        haystack.contains(needle),
        step,
        &format!("expected {haystack:?} to contain {needle:?}"),
    )
}

/// Case-insensitive containment check, for site copy that is styled with
/// CSS text transforms (rendered text may differ from source casing).
pub fn ensure_contains_ci(haystack: &str, needle: &str, step: &str) -> Result<(), ScenarioError> {
    ensure(
        haystack.to_lowercase().contains(&needle.to_lowercase()),
        step,
        &format!("expected {haystack:?} to contain {needle:?} (case-insensitive)"),
    )
}

/// Exact equality on trimmed text.
pub fn ensure_eq(actual: &str, expected: &str, step: &str) -> Result<(), ScenarioError> {
    ensure(
        actual.trim() == expected.trim(),
        step,
        &format!("expected {expected:?}, got {actual:?}"),
    )
}

/// Exact count comparison.
pub fn ensure_count(actual: usize, expected: usize, step: &str) -> Result<(), ScenarioError> {
    ensure(
        actual == expected,
        step,
        &format!("expected {expected} item(s), got {actual}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failures_name_the_step() {
        let err = ensure(false, "cart count", "expected 2").unwrap_err();
        assert!(err.to_string().contains("cart count"));
    }

    #[test]
    fn case_insensitive_check_ignores_text_transform() {
        ensure_contains_ci("ENTER ACCOUNT INFORMATION", "Enter Account Information", "s").unwrap();
        assert!(ensure_contains_ci("Searched Products", "All Products", "s").is_err());
    }

    #[test]
    fn case_sensitive_check_respects_generated_names() {
        ensure_contains("Logged in as Ava Reyes", "Ava Reyes", "banner").unwrap();
        assert!(ensure_contains("logged in as ava reyes", "Ava Reyes", "banner").is_err());
    }

    #[test]
    fn eq_check_trims_both_sides() {
        ensure_eq(" 4 \n", "4", "quantity").unwrap();
        assert!(ensure_eq("3", "4", "quantity").is_err());
    }

    #[test]
    fn session_errors_convert_transparently() {
        let err: ScenarioError = SessionError::Timeout("banner".into()).into();
        assert!(matches!(err, ScenarioError::Session(_)));
    }
}
