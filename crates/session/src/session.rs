//! One browser tab, wrapped in a bounded semantic API.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::cdp::browser_protocol::dom::SetFileInputFilesParams;
use chromiumoxide::cdp::browser_protocol::page::{
    EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde_json::Value;
use tokio::time::{sleep, Instant};
use tracing::{debug, trace, warn};
use url::Url;
use uuid::Uuid;

use crate::driver::TimeoutsConfig;
use crate::errors::SessionError;
use crate::selector::Selector;

/// Opaque session identifier, unique per tab.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// First eight hex characters, for directory names and logs.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(8)]
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

const VISIBLE_FN: &str = r#"function() {
    if (!this.isConnected) { return false; }
    const rect = this.getBoundingClientRect();
    if (rect.width <= 0 || rect.height <= 0) { return false; }
    const style = window.getComputedStyle(this);
    return style.visibility !== 'hidden' && style.display !== 'none';
}"#;

const ENABLED_FN: &str = "function() { return !this.disabled; }";

const IN_VIEWPORT_FN: &str = r#"function() {
    const rect = this.getBoundingClientRect();
    return rect.bottom > 0 && rect.top < window.innerHeight;
}"#;

/// The live browser-tab handle a scenario operates within.
///
/// Locator resolution happens per interaction; a `Session` never caches
/// element handles across calls, so a full navigation only requires the
/// caller to construct fresh page abstractions, not a fresh session.
pub struct Session {
    id: SessionId,
    page: Page,
    base_url: Url,
    timeouts: TimeoutsConfig,
    download_dir: PathBuf,
}

impl Session {
    pub(crate) fn new(
        id: SessionId,
        page: Page,
        base_url: Url,
        timeouts: TimeoutsConfig,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            id,
            page,
            base_url,
            timeouts,
            download_dir,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Directory downloads for this tab land in.
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Default bound for element waits.
    pub fn action_timeout(&self) -> Duration {
        self.timeouts.action()
    }

    // ---- navigation -----------------------------------------------------

    /// Navigate to a path relative to the base URL (or an absolute URL) and
    /// wait for the document to become ready.
    pub async fn navigate(&self, path: &str) -> Result<(), SessionError> {
        let target = self
            .base_url
            .join(path)
            .map_err(|err| SessionError::Navigation(format!("bad path '{path}': {err}")))?;
        debug!(session = %self.id, url = %target, "navigate");
        self.page
            .goto(target.as_str())
            .await
            .map_err(|err| SessionError::Navigation(format!("goto {target}: {err}")))?;
        self.wait_dom_ready(self.timeouts.navigation()).await
    }

    /// Poll `document.readyState` until the page settles.
    pub async fn wait_dom_ready(&self, bound: Duration) -> Result<(), SessionError> {
        let deadline = Instant::now() + bound;
        loop {
            let state = self
                .evaluate_value("document.readyState")
                .await
                .unwrap_or(Value::Null);
            if matches!(state.as_str(), Some("interactive") | Some("complete")) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SessionError::Timeout(format!(
                    "document not ready within {bound:?}"
                )));
            }
            sleep(self.timeouts.poll()).await;
        }
    }

    pub async fn title(&self) -> Result<String, SessionError> {
        self.page
            .get_title()
            .await
            .map_err(|err| SessionError::CdpIo(format!("title: {err}")))
            .map(Option::unwrap_or_default)
    }

    pub async fn current_url(&self) -> Result<String, SessionError> {
        self.page
            .url()
            .await
            .map_err(|err| SessionError::CdpIo(format!("url: {err}")))
            .map(Option::unwrap_or_default)
    }

    // ---- bounded waits --------------------------------------------------

    /// Wait until the element is attached and visible, up to the default
    /// action bound.
    pub async fn wait_visible(&self, selector: &Selector) -> Result<(), SessionError> {
        self.wait_visible_within(selector, self.timeouts.action())
            .await
    }

    /// Wait until the element is attached and visible, up to `bound`.
    pub async fn wait_visible_within(
        &self,
        selector: &Selector,
        bound: Duration,
    ) -> Result<(), SessionError> {
        self.resolve_visible_within(selector, bound).await.map(|_| ())
    }

    /// Wait until the element is visible and enabled, up to `bound`.
    pub async fn wait_interactable_within(
        &self,
        selector: &Selector,
        bound: Duration,
    ) -> Result<(), SessionError> {
        let deadline = Instant::now() + bound;
        loop {
            if let Ok(element) = self.resolve(selector).await {
                let visible = self.js_bool(&element, VISIBLE_FN).await.unwrap_or(false);
                let enabled = self.js_bool(&element, ENABLED_FN).await.unwrap_or(false);
                if visible && enabled {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(SessionError::Timeout(format!(
                    "'{selector}' not interactable within {bound:?}"
                )));
            }
            sleep(self.timeouts.poll()).await;
        }
    }

    // ---- actions --------------------------------------------------------

    /// Scroll the element into view and click it with real input events.
    pub async fn click(&self, selector: &Selector) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        element
            .scroll_into_view()
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("scroll '{selector}': {err}")))?;
        element
            .click()
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("click '{selector}': {err}")))?;
        trace!(session = %self.id, %selector, "clicked");
        Ok(())
    }

    /// Dispatch a DOM `click()` directly, bypassing hit testing. Reserved
    /// for the forced fallback of the primary-action policy.
    pub async fn click_forced(&self, selector: &Selector) -> Result<(), SessionError> {
        let element = self.resolve_within(selector, self.timeouts.action()).await?;
        self.js_call(&element, "function() { this.click(); }")
            .await
            .map_err(|err| {
                SessionError::InteractionBlocked(format!("forced click '{selector}': {err}"))
            })?;
        debug!(session = %self.id, %selector, "forced click dispatched");
        Ok(())
    }

    /// Clear the field and type `text` into it with key events.
    pub async fn fill(&self, selector: &Selector, text: &str) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        self.js_call(&element, "function() { this.value = ''; }")
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("clear '{selector}': {err}")))?;
        element
            .focus()
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("focus '{selector}': {err}")))?;
        element
            .type_str(text)
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("type '{selector}': {err}")))?;
        trace!(session = %self.id, %selector, "filled");
        Ok(())
    }

    /// Ensure a checkbox or radio ends up checked.
    pub async fn check(&self, selector: &Selector) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        let checked = self
            .js_bool(&element, "function() { return !!this.checked; }")
            .await?;
        if !checked {
            element.click().await.map_err(|err| {
                SessionError::InteractionBlocked(format!("check '{selector}': {err}"))
            })?;
        }
        Ok(())
    }

    /// Select a dropdown option by its `value` attribute.
    pub async fn select_value(&self, selector: &Selector, value: &str) -> Result<(), SessionError> {
        self.select_option(selector, value, true).await
    }

    /// Select a dropdown option by its visible label.
    pub async fn select_label(&self, selector: &Selector, label: &str) -> Result<(), SessionError> {
        self.select_option(selector, label, false).await
    }

    async fn select_option(
        &self,
        selector: &Selector,
        wanted: &str,
        by_value: bool,
    ) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        let wanted_json = serde_json::to_string(wanted)
            .map_err(|err| SessionError::Internal(format!("encode option: {err}")))?;
        let func = format!(
            r#"function() {{
                const wanted = {wanted_json};
                const options = Array.from(this.options || []);
                const hit = options.find(o =>
                    {by_value} ? o.value === wanted : o.textContent.trim() === wanted);
                if (!hit) {{ return false; }}
                this.value = hit.value;
                this.dispatchEvent(new Event('input', {{ bubbles: true }}));
                this.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }}"#
        );
        let matched = self.js_bool(&element, &func).await?;
        if !matched {
            return Err(SessionError::ElementNotFound(format!(
                "option '{wanted}' in '{selector}'"
            )));
        }
        Ok(())
    }

    /// Move the pointer over the element (triggers `:hover` affordances).
    pub async fn hover(&self, selector: &Selector) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        element
            .hover()
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("hover '{selector}': {err}")))?;
        Ok(())
    }

    pub async fn scroll_into_view(&self, selector: &Selector) -> Result<(), SessionError> {
        let element = self.resolve_within(selector, self.timeouts.action()).await?;
        element
            .scroll_into_view()
            .await
            .map_err(|err| SessionError::InteractionBlocked(format!("scroll '{selector}': {err}")))?;
        Ok(())
    }

    pub async fn scroll_to_bottom(&self) -> Result<(), SessionError> {
        self.evaluate_value("window.scrollTo(0, document.body.scrollHeight)")
            .await
            .map(|_| ())
    }

    pub async fn scroll_to_top(&self) -> Result<(), SessionError> {
        self.evaluate_value("window.scrollTo(0, 0)").await.map(|_| ())
    }

    /// Inject a local file into a file input via the DOM domain.
    pub async fn upload_file(&self, selector: &Selector, path: &Path) -> Result<(), SessionError> {
        let element = self
            .resolve_visible_within(selector, self.timeouts.action())
            .await?;
        let params = SetFileInputFilesParams::builder()
            .file(path.to_string_lossy().to_string())
            .backend_node_id(element.backend_node_id)
            .build()
            .map_err(|err| SessionError::Internal(format!("upload params: {err}")))?;
        self.page
            .execute(params)
            .await
            .map_err(|err| SessionError::CdpIo(format!("upload '{selector}': {err}")))?;
        debug!(session = %self.id, %selector, file = %path.display(), "file staged into input");
        Ok(())
    }

    // ---- reads ----------------------------------------------------------

    /// Rendered text of the element; waits for visibility up to the default
    /// bound and fails rather than returning a placeholder.
    pub async fn text(&self, selector: &Selector) -> Result<String, SessionError> {
        self.text_within(selector, self.timeouts.action()).await
    }

    /// Rendered text with an explicit bound.
    pub async fn text_within(
        &self,
        selector: &Selector,
        bound: Duration,
    ) -> Result<String, SessionError> {
        let element = self.resolve_visible_within(selector, bound).await?;
        element
            .inner_text()
            .await
            .map_err(|err| SessionError::CdpIo(format!("text '{selector}': {err}")))
            .map(Option::unwrap_or_default)
    }

    /// Rendered text of every match, in document order.
    pub async fn texts(&self, selector: &Selector) -> Result<Vec<String>, SessionError> {
        let mut out = Vec::new();
        for element in self.resolve_all(selector).await? {
            let text = element
                .inner_text()
                .await
                .map_err(|err| SessionError::CdpIo(format!("texts '{selector}': {err}")))?
                .unwrap_or_default();
            out.push(text);
        }
        Ok(out)
    }

    /// Number of current matches; zero is a valid answer, not an error.
    pub async fn count(&self, selector: &Selector) -> Result<usize, SessionError> {
        Ok(self.resolve_all(selector).await?.len())
    }

    /// Immediate visibility probe; absence is `false`, not an error.
    pub async fn is_visible(&self, selector: &Selector) -> Result<bool, SessionError> {
        match self.resolve(selector).await {
            Ok(element) => self.js_bool(&element, VISIBLE_FN).await,
            Err(SessionError::ElementNotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Whether any part of the element intersects the viewport.
    pub async fn in_viewport(&self, selector: &Selector) -> Result<bool, SessionError> {
        let element = self.resolve_within(selector, self.timeouts.action()).await?;
        self.js_bool(&element, IN_VIEWPORT_FN).await
    }

    /// Evaluate a JS expression in the page and return its JSON value.
    pub async fn evaluate_value(&self, expression: &str) -> Result<Value, SessionError> {
        let result = self
            .page
            .evaluate(expression)
            .await
            .map_err(|err| SessionError::CdpIo(format!("evaluate: {err}")))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    // ---- dialogs & downloads -------------------------------------------

    /// Auto-accept every JavaScript dialog (alert/confirm) this tab raises
    /// from now on. Best-effort; runs until the tab closes.
    pub async fn auto_accept_dialogs(&self) -> Result<(), SessionError> {
        let mut dialogs = self
            .page
            .event_listener::<EventJavascriptDialogOpening>()
            .await
            .map_err(|err| SessionError::CdpIo(format!("dialog listener: {err}")))?;
        let page = self.page.clone();
        let session = self.id.clone();
        tokio::spawn(async move {
            while let Some(dialog) = dialogs.next().await {
                debug!(session = %session, message = %dialog.message, "accepting dialog");
                match HandleJavaScriptDialogParams::builder().accept(true).build() {
                    Ok(params) => {
                        if let Err(err) = page.execute(params).await {
                            warn!(session = %session, "dialog accept failed: {err}");
                        }
                    }
                    Err(err) => warn!(session = %session, "dialog params: {err}"),
                }
            }
        });
        Ok(())
    }

    /// Route this tab's downloads into its staging directory.
    pub(crate) async fn stage_downloads(&self) -> Result<(), SessionError> {
        let params = SetDownloadBehaviorParams::builder()
            .behavior(SetDownloadBehaviorBehavior::Allow)
            .download_path(self.download_dir.to_string_lossy().to_string())
            .build()
            .map_err(|err| SessionError::Internal(format!("download params: {err}")))?;
        self.page
            .execute(params)
            .await
            .map_err(|err| SessionError::CdpIo(format!("download staging: {err}")))?;
        Ok(())
    }

    /// Wait for a completed download to appear in the staging directory and
    /// return its path.
    pub async fn wait_for_download(&self, bound: Duration) -> Result<PathBuf, SessionError> {
        let deadline = Instant::now() + bound;
        loop {
            if let Some(path) = self.completed_download()? {
                return Ok(path);
            }
            if Instant::now() >= deadline {
                return Err(SessionError::Timeout(format!(
                    "no download within {bound:?}"
                )));
            }
            sleep(self.timeouts.poll()).await;
        }
    }

    fn completed_download(&self) -> Result<Option<PathBuf>, SessionError> {
        let entries = std::fs::read_dir(&self.download_dir)
            .map_err(|err| SessionError::Internal(format!("download dir: {err}")))?;
        for entry in entries.flatten() {
            let path = entry.path();
            let in_progress = path
                .extension()
                .is_some_and(|ext| ext == "crdownload" || ext == "tmp");
            let non_empty = entry.metadata().map(|m| m.len() > 0).unwrap_or(false);
            if path.is_file() && !in_progress && non_empty {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Close the tab. The owning scenario calls this on both success and
    /// failure paths.
    pub async fn close(self) {
        if let Err(err) = self.page.close().await {
            debug!(session = %self.id, "page close: {err}");
        }
    }

    // ---- resolution internals -------------------------------------------

    async fn resolve(&self, selector: &Selector) -> Result<Element, SessionError> {
        let found = match selector {
            Selector::Css(css) => self.page.find_element(css.as_str()).await,
            Selector::XPath(xpath) => self.page.find_xpath(xpath.as_str()).await,
        };
        found.map_err(|err| SessionError::ElementNotFound(format!("'{selector}': {err}")))
    }

    async fn resolve_all(&self, selector: &Selector) -> Result<Vec<Element>, SessionError> {
        let found = match selector {
            Selector::Css(css) => self.page.find_elements(css.as_str()).await,
            Selector::XPath(xpath) => self.page.find_xpaths(xpath.as_str()).await,
        };
        match found {
            Ok(elements) => Ok(elements),
            // An empty result set is not a transport failure.
            Err(chromiumoxide::error::CdpError::NotFound) => Ok(Vec::new()),
            Err(err) => Err(SessionError::CdpIo(format!("query '{selector}': {err}"))),
        }
    }

    /// Poll until the element is attached, up to `bound`.
    async fn resolve_within(
        &self,
        selector: &Selector,
        bound: Duration,
    ) -> Result<Element, SessionError> {
        let deadline = Instant::now() + bound;
        loop {
            match self.resolve(selector).await {
                Ok(element) => return Ok(element),
                Err(err) => {
                    if Instant::now() >= deadline {
                        return Err(err);
                    }
                }
            }
            sleep(self.timeouts.poll()).await;
        }
    }

    /// Poll until the element is attached and visible, up to `bound`.
    async fn resolve_visible_within(
        &self,
        selector: &Selector,
        bound: Duration,
    ) -> Result<Element, SessionError> {
        let deadline = Instant::now() + bound;
        let mut seen = false;
        loop {
            if let Ok(element) = self.resolve(selector).await {
                seen = true;
                if self.js_bool(&element, VISIBLE_FN).await.unwrap_or(false) {
                    return Ok(element);
                }
            }
            if Instant::now() >= deadline {
                return Err(if seen {
                    SessionError::Timeout(format!("'{selector}' not visible within {bound:?}"))
                } else {
                    SessionError::ElementNotFound(format!(
                        "'{selector}' not attached within {bound:?}"
                    ))
                });
            }
            sleep(self.timeouts.poll()).await;
        }
    }

    async fn js_call(&self, element: &Element, function: &str) -> Result<Value, SessionError> {
        let returns = element
            .call_js_fn(function, false)
            .await
            .map_err(|err| SessionError::CdpIo(format!("js call: {err}")))?;
        if let Some(details) = returns.exception_details {
            return Err(SessionError::CdpIo(format!("js exception: {}", details.text)));
        }
        Ok(returns.result.value.unwrap_or(Value::Null))
    }

    async fn js_bool(&self, element: &Element, function: &str) -> Result<bool, SessionError> {
        Ok(self.js_call(element, function).await?.as_bool().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_short_form_is_stable() {
        let id = SessionId("abcdef0123456789".to_string());
        assert_eq!(id.short(), "abcdef01");
        assert_eq!(id.to_string(), "abcdef01");
    }

    #[test]
    fn select_function_escapes_quoted_options() {
        // Mirrors the interpolation in select_option: the wanted string is
        // JSON-encoded before being spliced into the function body.
        let wanted = serde_json::to_string("May's \"special\"").unwrap();
        assert!(wanted.contains("\\\""));
        let func = format!("function() {{ const wanted = {wanted}; }}");
        assert!(func.contains(r#"May's \"special\""#));
    }

    #[test]
    fn visibility_probe_checks_geometry_and_style() {
        assert!(VISIBLE_FN.contains("getBoundingClientRect"));
        assert!(VISIBLE_FN.contains("visibility"));
        assert!(ENABLED_FN.contains("disabled"));
    }
}
