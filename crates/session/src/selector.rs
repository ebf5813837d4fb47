//! Driver-level element selectors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolvable DOM query. Resolution happens at interaction time; a
/// `Selector` never holds a live element handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector.
    Css(String),
    /// XPath expression.
    XPath(String),
}

impl Selector {
    pub fn css(selector: impl Into<String>) -> Self {
        Selector::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Selector::XPath(expression.into())
    }

    /// Raw query string, strategy-independent.
    pub fn raw(&self) -> &str {
        match self {
            Selector::Css(s) | Selector::XPath(s) => s,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Css(s) => write!(f, "css:{s}"),
            Selector::XPath(s) => write!(f, "xpath:{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_strategy_prefix() {
        assert_eq!(Selector::css("#cart").to_string(), "css:#cart");
        assert_eq!(
            Selector::xpath("//a[contains(., 'Top')]").to_string(),
            "xpath://a[contains(., 'Top')]"
        );
    }

    #[test]
    fn raw_strips_strategy() {
        assert_eq!(Selector::css(".btn").raw(), ".btn");
    }
}
