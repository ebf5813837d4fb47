//! Machine-readable run report.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub ok: bool,
    pub latency_ms: u64,
    /// Which assertion or wait failed, when `ok` is false.
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn passed(name: &str, latency_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            ok: true,
            latency_ms,
            error: None,
        }
    }

    pub fn failed(name: &str, latency_ms: u64, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ok: false,
            latency_ms,
            error: Some(error.into()),
        }
    }
}

/// Aggregated outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>, results: Vec<ScenarioResult>) -> Self {
        let passed = results.iter().filter(|r| r.ok).count();
        let failed = results.len() - passed;
        Self {
            started_at,
            finished_at: Utc::now(),
            passed,
            failed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_derived_from_results() {
        let report = RunReport::new(
            Utc::now(),
            vec![
                ScenarioResult::passed("register-user", 1200),
                ScenarioResult::failed("product-search", 800, "no results"),
            ],
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = RunReport::new(Utc::now(), vec![ScenarioResult::passed("cart", 10)]);
        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.results.len(), 1);
        assert!(back.all_passed());
    }
}
