//! Browser process lifecycle.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::errors::SessionError;
use crate::session::{Session, SessionId};

/// Timeout knobs, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutsConfig {
    /// Default bound for element waits and interactions.
    pub action_ms: u64,
    /// Bound for full page navigations.
    pub navigation_ms: u64,
    /// Polling interval inside bounded waits.
    pub poll_ms: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            action_ms: 10_000,
            navigation_ms: 30_000,
            poll_ms: 250,
        }
    }
}

impl TimeoutsConfig {
    pub fn action(&self) -> Duration {
        Duration::from_millis(self.action_ms)
    }

    pub fn navigation(&self) -> Duration {
        Duration::from_millis(self.navigation_ms)
    }

    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Base URL every session navigates relative to.
    pub base_url: String,
    pub headless: bool,
    /// Viewport size as (width, height).
    pub window: (u32, u32),
    /// Explicit Chrome/Chromium binary; auto-detected when absent.
    pub chrome_executable: Option<PathBuf>,
    /// Root directory for per-session download staging; a temp directory
    /// when absent.
    pub download_root: Option<PathBuf>,
    pub timeouts: TimeoutsConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://automationexercise.com".to_string(),
            headless: true,
            window: (1366, 900),
            chrome_executable: None,
            download_root: None,
            timeouts: TimeoutsConfig::default(),
        }
    }
}

/// Owns one browser process and its CDP event pump. Hands out [`Session`]
/// values, one tab each.
pub struct Driver {
    browser: Browser,
    event_pump: JoinHandle<()>,
    base_url: Url,
    timeouts: TimeoutsConfig,
    download_root: PathBuf,
}

impl Driver {
    /// Launch the browser process.
    pub async fn launch(config: DriverConfig) -> Result<Self, SessionError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| SessionError::Internal(format!("invalid base url: {err}")))?;

        let mut builder = BrowserConfig::builder()
            .window_size(config.window.0, config.window.1)
            .no_sandbox();
        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(ref path) = config.chrome_executable {
            builder = builder.chrome_executable(path.clone());
        }
        let browser_config = builder
            .build()
            .map_err(|err| SessionError::Internal(format!("browser config: {err}")))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|err| SessionError::CdpIo(format!("browser launch: {err}")))?;

        // The handler stream must be drained for the whole browser lifetime.
        let event_pump = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!("cdp event pump: {err}");
                }
            }
        });

        let download_root = match config.download_root {
            Some(path) => path,
            None => std::env::temp_dir()
                .join("storefront-e2e")
                .join(Uuid::new_v4().simple().to_string()),
        };
        std::fs::create_dir_all(&download_root)
            .map_err(|err| SessionError::Internal(format!("download root: {err}")))?;

        info!(base_url = %base_url, headless = config.headless, "browser launched");

        Ok(Self {
            browser,
            event_pump,
            base_url,
            timeouts: config.timeouts,
            download_root,
        })
    }

    /// Open a fresh tab with isolated downloads.
    pub async fn new_session(&self) -> Result<Session, SessionError> {
        let id = SessionId::new();
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|err| SessionError::CdpIo(format!("new page: {err}")))?;

        let download_dir = self.download_root.join(id.short());
        std::fs::create_dir_all(&download_dir)
            .map_err(|err| SessionError::Internal(format!("download dir: {err}")))?;

        let session = Session::new(
            id,
            page,
            self.base_url.clone(),
            self.timeouts.clone(),
            download_dir,
        );
        session.stage_downloads().await?;
        debug!(session = %session.id(), "session opened");
        Ok(session)
    }

    /// Close the browser process and stop the event pump.
    pub async fn shutdown(mut self) {
        if let Err(err) = self.browser.close().await {
            warn!("browser close: {err}");
        }
        if let Err(err) = self.browser.wait().await {
            debug!("browser reap: {err}");
        }
        self.event_pump.abort();
        info!("browser shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_demo_site() {
        let config = DriverConfig::default();
        assert!(config.base_url.contains("automationexercise.com"));
        assert!(config.headless);
        assert!(config.timeouts.navigation() > config.timeouts.action());
    }

    #[test]
    fn timeouts_convert_to_durations() {
        let timeouts = TimeoutsConfig {
            action_ms: 1_500,
            navigation_ms: 9_000,
            poll_ms: 100,
        };
        assert_eq!(timeouts.action(), Duration::from_millis(1_500));
        assert_eq!(timeouts.poll(), Duration::from_millis(100));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = DriverConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: DriverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.window, config.window);
    }
}
