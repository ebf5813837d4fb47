//! Suite configuration: defaults, optional JSON file, environment
//! overrides, in that order.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use storefront_session::DriverConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub driver: DriverConfig,

    /// Bound for the post-signup "Logged in as" banner. Generous: first
    /// paint on the live site is unpredictable.
    pub banner_timeout_ms: u64,

    /// Bound for confirmation pages (account created/deleted, order
    /// success).
    pub confirmation_timeout_ms: u64,

    /// Bound for the invoice download to land on disk.
    pub download_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            driver: DriverConfig::default(),
            banner_timeout_ms: 45_000,
            confirmation_timeout_ms: 15_000,
            download_timeout_ms: 60_000,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the optional JSON file, then
    /// `STOREFRONT_*` environment variables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading settings file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing settings file {}", path.display()))?
            }
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Apply environment overrides through a lookup function (injected so
    /// tests never mutate process environment).
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(value) = var("STOREFRONT_BASE_URL") {
            self.driver.base_url = value;
        }
        if let Some(value) = var("STOREFRONT_HEADLESS") {
            if let Ok(flag) = value.parse::<bool>() {
                self.driver.headless = flag;
            }
        }
        if let Some(value) = var("STOREFRONT_CHROME") {
            self.driver.chrome_executable = Some(value.into());
        }
        if let Some(value) = var("STOREFRONT_DOWNLOAD_DIR") {
            self.driver.download_root = Some(value.into());
        }
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_millis(self.confirmation_timeout_ms)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_millis(self.download_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_a_generous_banner_bound() {
        let settings = Settings::default();
        assert!(settings.banner_timeout() >= Duration::from_secs(30));
        assert!(settings.driver.headless);
    }

    #[test]
    fn env_overrides_take_precedence() {
        let mut settings = Settings::default();
        settings.apply_env(|key| match key {
            "STOREFRONT_BASE_URL" => Some("http://localhost:8080".to_string()),
            "STOREFRONT_HEADLESS" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(settings.driver.base_url, "http://localhost:8080");
        assert!(!settings.driver.headless);
    }

    #[test]
    fn malformed_env_flags_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(|key| {
            (key == "STOREFRONT_HEADLESS").then(|| "not-a-bool".to_string())
        });
        assert!(settings.driver.headless);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "banner_timeout_ms": 60000 }"#).unwrap();
        assert_eq!(settings.banner_timeout_ms, 60_000);
        assert_eq!(
            settings.confirmation_timeout_ms,
            Settings::default().confirmation_timeout_ms
        );
    }
}
