//! Harness configuration.
//!
//! A flat, immutable record built once per test run, either from defaults
//! or environment overrides. Initialization is explicit: nothing in the
//! crate reads the environment behind the caller's back.

use crate::result::{ManejarError, ManejarResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Supported browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// Google Chrome / Chromium
    Chrome,
    /// Mozilla Firefox
    Firefox,
    /// Microsoft Edge
    Edge,
    /// Apple Safari
    Safari,
}

impl BrowserKind {
    /// Parse a browser name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::UnsupportedBrowser`] for unrecognized names.
    pub fn parse(name: &str) -> ManejarResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "edge" => Ok(Self::Edge),
            "safari" => Ok(Self::Safari),
            _ => Err(ManejarError::UnsupportedBrowser {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Edge => "edge",
            Self::Safari => "safari",
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = ManejarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Configuration for a test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base URL of the application under test
    pub base_url: String,
    /// Browser to drive
    pub browser: BrowserKind,
    /// Run without a visible window
    pub headless: bool,
    /// WebDriver server endpoint (e.g., "http://localhost:4444")
    pub webdriver_url: String,
    /// Implicit wait applied to the session, in seconds
    pub implicit_wait_secs: u64,
    /// Explicit wait used by lookups and condition waits, in seconds
    pub explicit_wait_secs: u64,
    /// Page load timeout, in seconds
    pub page_load_timeout_secs: u64,
    /// Capture a screenshot when a test fails
    pub screenshot_on_failure: bool,
    /// Directory for diagnostic screenshots
    pub screenshots_dir: PathBuf,
    /// Directory for run reports
    pub reports_dir: PathBuf,
    /// Directory for per-run log files
    pub logs_dir: PathBuf,
    /// Browser window width in pixels
    pub window_width: u32,
    /// Browser window height in pixels
    pub window_height: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            browser: BrowserKind::Chrome,
            headless: false,
            webdriver_url: "http://localhost:4444".to_string(),
            implicit_wait_secs: 10,
            explicit_wait_secs: 20,
            page_load_timeout_secs: 30,
            screenshot_on_failure: true,
            screenshots_dir: PathBuf::from("screenshots"),
            reports_dir: PathBuf::from("reports"),
            logs_dir: PathBuf::from("logs"),
            window_width: 1920,
            window_height: 1080,
        }
    }
}

impl HarnessConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `BASE_URL`, `BROWSER`, `HEADLESS`,
    /// `IMPLICIT_WAIT`, `EXPLICIT_WAIT`, `WEBDRIVER_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::UnsupportedBrowser`] for an unrecognized
    /// `BROWSER`, or [`ManejarError::Config`] for unparseable numbers.
    pub fn from_env() -> ManejarResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(browser) = std::env::var("BROWSER") {
            config.browser = BrowserKind::parse(&browser)?;
        }
        if let Ok(headless) = std::env::var("HEADLESS") {
            config.headless = parse_bool(&headless);
        }
        if let Ok(implicit) = std::env::var("IMPLICIT_WAIT") {
            config.implicit_wait_secs = parse_secs("IMPLICIT_WAIT", &implicit)?;
        }
        if let Ok(explicit) = std::env::var("EXPLICIT_WAIT") {
            config.explicit_wait_secs = parse_secs("EXPLICIT_WAIT", &explicit)?;
        }
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            config.webdriver_url = webdriver_url;
        }

        Ok(config)
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the browser.
    #[must_use]
    pub const fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    /// Enable or disable headless mode.
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the WebDriver server endpoint.
    #[must_use]
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Set the explicit wait in seconds.
    #[must_use]
    pub const fn with_explicit_wait(mut self, secs: u64) -> Self {
        self.explicit_wait_secs = secs;
        self
    }

    /// Set the window size.
    #[must_use]
    pub const fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the screenshots directory.
    #[must_use]
    pub fn with_screenshots_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshots_dir = dir.into();
        self
    }

    /// Explicit wait as a [`Duration`].
    #[must_use]
    pub const fn explicit_wait(&self) -> Duration {
        Duration::from_secs(self.explicit_wait_secs)
    }

    /// Implicit wait as a [`Duration`].
    #[must_use]
    pub const fn implicit_wait(&self) -> Duration {
        Duration::from_secs(self.implicit_wait_secs)
    }

    /// Page load timeout as a [`Duration`].
    #[must_use]
    pub const fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    /// Join a path onto the base URL, normalizing slashes.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

fn parse_secs(name: &str, value: &str) -> ManejarResult<u64> {
    value.trim().parse().map_err(|_| ManejarError::Config {
        message: format!("{name} must be a whole number of seconds, got '{value}'"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod browser_kind_tests {
        use super::*;

        #[test]
        fn test_parse_is_case_insensitive() {
            assert_eq!(BrowserKind::parse("Chrome").unwrap(), BrowserKind::Chrome);
            assert_eq!(BrowserKind::parse("FIREFOX").unwrap(), BrowserKind::Firefox);
            assert_eq!(BrowserKind::parse("edge").unwrap(), BrowserKind::Edge);
            assert_eq!(BrowserKind::parse("SaFaRi").unwrap(), BrowserKind::Safari);
        }

        #[test]
        fn test_parse_trims_whitespace() {
            assert_eq!(BrowserKind::parse(" chrome ").unwrap(), BrowserKind::Chrome);
        }

        #[test]
        fn test_parse_rejects_unknown_names() {
            let err = BrowserKind::parse("netscape").unwrap_err();
            match err {
                ManejarError::UnsupportedBrowser { name } => assert_eq!(name, "netscape"),
                other => panic!("expected UnsupportedBrowser, got {other:?}"),
            }
        }

        #[test]
        fn test_from_str_round_trip() {
            for kind in [
                BrowserKind::Chrome,
                BrowserKind::Firefox,
                BrowserKind::Edge,
                BrowserKind::Safari,
            ] {
                assert_eq!(kind.as_str().parse::<BrowserKind>().unwrap(), kind);
            }
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_defaults_match_documented_values() {
            let config = HarnessConfig::default();
            assert_eq!(config.base_url, "https://example.com");
            assert_eq!(config.browser, BrowserKind::Chrome);
            assert!(!config.headless);
            assert_eq!(config.webdriver_url, "http://localhost:4444");
            assert_eq!(config.implicit_wait_secs, 10);
            assert_eq!(config.explicit_wait_secs, 20);
            assert_eq!(config.page_load_timeout_secs, 30);
            assert!(config.screenshot_on_failure);
        }

        #[test]
        fn test_builder() {
            let config = HarnessConfig::new()
                .with_base_url("http://localhost:8080")
                .with_browser(BrowserKind::Firefox)
                .with_headless(true)
                .with_explicit_wait(5)
                .with_window_size(1280, 720);

            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.browser, BrowserKind::Firefox);
            assert!(config.headless);
            assert_eq!(config.explicit_wait(), Duration::from_secs(5));
            assert_eq!(config.window_width, 1280);
        }

        #[test]
        fn test_page_url_normalizes_slashes() {
            let config = HarnessConfig::new().with_base_url("http://localhost:8080/");
            assert_eq!(config.page_url("/login"), "http://localhost:8080/login");
            assert_eq!(config.page_url("login"), "http://localhost:8080/login");
        }

        #[test]
        fn test_durations() {
            let config = HarnessConfig::default();
            assert_eq!(config.implicit_wait(), Duration::from_secs(10));
            assert_eq!(config.explicit_wait(), Duration::from_secs(20));
            assert_eq!(config.page_load_timeout(), Duration::from_secs(30));
        }

        #[test]
        fn test_serde_round_trip() {
            let config = HarnessConfig::new().with_browser(BrowserKind::Edge);
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"edge\""));
            let back: HarnessConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back.browser, BrowserKind::Edge);
        }
    }

    mod env_parsing_tests {
        use super::*;

        #[test]
        fn test_parse_bool_accepts_true_and_one() {
            assert!(parse_bool("true"));
            assert!(parse_bool("TRUE"));
            assert!(parse_bool("1"));
            assert!(!parse_bool("false"));
            assert!(!parse_bool("no"));
            assert!(!parse_bool(""));
        }

        #[test]
        fn test_parse_secs_rejects_garbage() {
            assert_eq!(parse_secs("EXPLICIT_WAIT", "20").unwrap(), 20);
            let err = parse_secs("EXPLICIT_WAIT", "soon").unwrap_err();
            match err {
                ManejarError::Config { message } => {
                    assert!(message.contains("EXPLICIT_WAIT"));
                    assert!(message.contains("soon"));
                }
                other => panic!("expected Config error, got {other:?}"),
            }
        }
    }
}
