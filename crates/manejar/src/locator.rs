//! Locator abstraction for element selection.
//!
//! A locator is a fixed (strategy, selector) pair identifying how to find
//! a DOM element. Page objects declare them once at construction and never
//! mutate them.

use serde::{Deserialize, Serialize};
use thirtyfour::By;

/// Strategy for locating an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Element `id` attribute
    Id,
    /// CSS selector
    Css,
    /// XPath expression
    XPath,
    /// Exact anchor link text
    LinkText,
    /// Single class name
    ClassName,
    /// Element `name` attribute
    Name,
}

impl Strategy {
    /// Short label used in log lines and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Css => "css",
            Self::XPath => "xpath",
            Self::LinkText => "link-text",
            Self::ClassName => "class-name",
            Self::Name => "name",
        }
    }
}

/// A (strategy, selector) pair for finding a DOM element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    selector: String,
}

impl Locator {
    /// Locate by `id` attribute.
    #[must_use]
    pub fn id(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Id,
            selector: selector.into(),
        }
    }

    /// Locate by CSS selector.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: selector.into(),
        }
    }

    /// Locate by XPath expression.
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: selector.into(),
        }
    }

    /// Locate an anchor by its exact link text.
    #[must_use]
    pub fn link_text(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::LinkText,
            selector: selector.into(),
        }
    }

    /// Locate by a single class name.
    #[must_use]
    pub fn class_name(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::ClassName,
            selector: selector.into(),
        }
    }

    /// Locate by `name` attribute.
    #[must_use]
    pub fn name(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Name,
            selector: selector.into(),
        }
    }

    /// The locator strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The selector string.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Convert to the WebDriver library's query type.
    #[must_use]
    pub fn by(&self) -> By {
        match self.strategy {
            Strategy::Id => By::Id(self.selector.as_str()),
            Strategy::Css => By::Css(self.selector.as_str()),
            Strategy::XPath => By::XPath(self.selector.as_str()),
            Strategy::LinkText => By::LinkText(self.selector.as_str()),
            Strategy::ClassName => By::ClassName(self.selector.as_str()),
            Strategy::Name => By::Name(self.selector.as_str()),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.strategy.as_str(), self.selector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction_tests {
        use super::*;

        #[test]
        fn test_id_locator() {
            let locator = Locator::id("username");
            assert_eq!(locator.strategy(), Strategy::Id);
            assert_eq!(locator.selector(), "username");
        }

        #[test]
        fn test_xpath_locator() {
            let locator = Locator::xpath("//button[@type='submit']");
            assert_eq!(locator.strategy(), Strategy::XPath);
            assert_eq!(locator.selector(), "//button[@type='submit']");
        }

        #[test]
        fn test_link_text_locator() {
            let locator = Locator::link_text("Logout");
            assert_eq!(locator.strategy(), Strategy::LinkText);
        }

        #[test]
        fn test_class_name_locator() {
            let locator = Locator::class_name("error-message");
            assert_eq!(locator.strategy(), Strategy::ClassName);
        }

        #[test]
        fn test_css_and_name_locators() {
            assert_eq!(Locator::css("form input").strategy(), Strategy::Css);
            assert_eq!(Locator::name("q").strategy(), Strategy::Name);
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_pairs_strategy_and_selector() {
            assert_eq!(Locator::id("username").to_string(), "id=username");
            assert_eq!(
                Locator::class_name("error-message").to_string(),
                "class-name=error-message"
            );
            assert_eq!(
                Locator::xpath("//button[@type='submit']").to_string(),
                "xpath=//button[@type='submit']"
            );
        }
    }

    mod by_conversion_tests {
        use super::*;

        #[test]
        fn test_by_matches_strategy() {
            // By's Debug output names the WebDriver locator strategy in use.
            let by = format!("{:?}", Locator::id("username").by());
            assert!(by.contains("username"));

            let by = format!("{:?}", Locator::link_text("Logout").by());
            assert!(by.contains("Logout"));

            let by = format!("{:?}", Locator::xpath("//div").by());
            assert!(by.contains("//div"));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_round_trip() {
            let locator = Locator::class_name("welcome-message");
            let json = serde_json::to_string(&locator).unwrap();
            let back: Locator = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locator);
        }
    }
}
