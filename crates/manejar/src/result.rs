//! Result and error types for Manejar.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Manejar operations
pub type ManejarResult<T> = Result<T, ManejarError>;

/// Errors that can occur in Manejar
#[derive(Debug, Error)]
pub enum ManejarError {
    /// Browser name not recognized by the driver factory
    #[error("Unsupported browser: {name}")]
    UnsupportedBrowser {
        /// The browser name that failed to parse
        name: String,
    },

    /// Element lookup timed out
    #[error("Element not found: {locator} (waited {timeout_ms}ms)")]
    ElementNotFound {
        /// The locator that failed to match
        locator: String,
        /// How long the lookup waited before giving up
        timeout_ms: u64,
        /// Diagnostic screenshot captured at failure time
        screenshot: Option<PathBuf>,
    },

    /// A wait condition was not met within its timeout
    #[error("Timed out after {ms}ms waiting for {condition}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of the awaited condition
        condition: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Screenshot capture or decode error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Scenario assertion failed
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Error message
        message: String,
    },

    /// WebDriver protocol error (propagated unchanged)
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_browser_message() {
        let err = ManejarError::UnsupportedBrowser {
            name: "netscape".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported browser: netscape");
    }

    #[test]
    fn test_element_not_found_message_includes_locator_and_timeout() {
        let err = ManejarError::ElementNotFound {
            locator: "id=username".to_string(),
            timeout_ms: 20_000,
            screenshot: Some(PathBuf::from("screenshots/element_not_found_username.png")),
        };
        let message = err.to_string();
        assert!(message.contains("id=username"));
        assert!(message.contains("20000ms"));
    }

    #[test]
    fn test_timeout_message() {
        let err = ManejarError::Timeout {
            ms: 5000,
            condition: "element id=spinner to become invisible".to_string(),
        };
        assert!(err.to_string().contains("5000ms"));
        assert!(err.to_string().contains("invisible"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ManejarError::from(io);
        assert!(matches!(err, ManejarError::Io(_)));
    }
}
