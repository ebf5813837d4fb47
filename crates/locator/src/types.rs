//! Semantic locator descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_session::Selector;

/// A semantic reference to a DOM element, resolved lazily.
///
/// Three strategies:
/// - `Css`: direct CSS selector matching
/// - `XPath`: raw XPath expression
/// - `Text`: tag with text content matching (partial, normalized)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// CSS selector.
    Css(String),

    /// XPath expression.
    XPath(String),

    /// Element of `tag` whose normalized text contains `content`.
    Text { tag: String, content: String },
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Locator::XPath(expression.into())
    }

    pub fn text(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Locator::Text {
            tag: tag.into(),
            content: content.into(),
        }
    }

    /// Strategy name as string.
    pub fn strategy_name(&self) -> &'static str {
        match self {
            Locator::Css(_) => "css",
            Locator::XPath(_) => "xpath",
            Locator::Text { .. } => "text",
        }
    }

    /// Lower to a driver-level query.
    pub fn selector(&self) -> Selector {
        match self {
            Locator::Css(css) => Selector::css(css.clone()),
            Locator::XPath(xpath) => Selector::xpath(xpath.clone()),
            Locator::Text { tag, content } => Selector::xpath(format!(
                "//{tag}[contains(normalize-space(.), {})]",
                xpath_literal(content)
            )),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css:{s}"),
            Locator::XPath(s) => write!(f, "xpath:{s}"),
            Locator::Text { tag, content } => write!(f, "text:{tag}:'{content}'"),
        }
    }
}

/// Quote a string as an XPath literal. XPath 1.0 has no escape syntax, so
/// strings containing both quote kinds are emitted via `concat()`.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let mut parts = Vec::new();
    for (index, piece) in value.split('\'').enumerate() {
        if index > 0 {
            parts.push("\"'\"".to_string());
        }
        if !piece.is_empty() {
            parts.push(format!("'{piece}'"));
        }
    }
    format!("concat({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_lowers_unchanged() {
        let locator = Locator::css("#cart_info_table tbody tr");
        assert_eq!(
            locator.selector(),
            Selector::css("#cart_info_table tbody tr")
        );
        assert_eq!(locator.strategy_name(), "css");
    }

    #[test]
    fn text_lowers_to_contains_xpath() {
        let locator = Locator::text("a", "Logged in as");
        assert_eq!(
            locator.selector(),
            Selector::xpath("//a[contains(normalize-space(.), 'Logged in as')]")
        );
    }

    #[test]
    fn xpath_literal_handles_plain_strings() {
        assert_eq!(xpath_literal("Top"), "'Top'");
    }

    #[test]
    fn xpath_literal_handles_single_quotes() {
        assert_eq!(xpath_literal("Women's"), "\"Women's\"");
    }

    #[test]
    fn xpath_literal_handles_both_quote_kinds() {
        let literal = xpath_literal(r#"Mr's "deal""#);
        assert!(literal.starts_with("concat("));
        assert!(literal.contains("\"'\""));
    }

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(Locator::text("h2", "Added!").to_string(), "text:h2:'Added!'");
    }
}
