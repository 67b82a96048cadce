//! Driver factory: maps a browser kind to a ready WebDriver session.
//!
//! The factory is a four-way switch over [`BrowserKind`] that applies a
//! fixed list of stability/performance flags per browser, connects to the
//! WebDriver server, and configures session timeouts. No retry, no
//! pooling, no version negotiation.

use crate::config::{BrowserKind, HarnessConfig};
use crate::result::ManejarResult;
use thirtyfour::prelude::*;
use thirtyfour::Capabilities;
use tracing::{info, warn};

/// Flags applied to Chrome sessions.
///
/// An explicit record of the supported options; there is no passthrough of
/// arbitrary keyword arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeFlags {
    /// Disable the sandbox (required in most containers)
    pub no_sandbox: bool,
    /// Write shared memory to /tmp instead of /dev/shm
    pub disable_dev_shm_usage: bool,
    /// Disable GPU acceleration
    pub disable_gpu: bool,
    /// Disable installed extensions
    pub disable_extensions: bool,
    /// Disable plugins
    pub disable_plugins: bool,
    /// Skip image loading for faster page loads
    pub disable_images: bool,
    /// Fixed window size applied at launch
    pub window_size: (u32, u32),
    /// Additional raw arguments
    pub extra_args: Vec<String>,
}

impl Default for ChromeFlags {
    fn default() -> Self {
        Self {
            no_sandbox: true,
            disable_dev_shm_usage: true,
            disable_gpu: true,
            disable_extensions: true,
            disable_plugins: true,
            disable_images: true,
            window_size: (1920, 1080),
            extra_args: Vec::new(),
        }
    }
}

impl ChromeFlags {
    /// Render the flag record as command-line arguments.
    #[must_use]
    pub fn args(&self, headless: bool) -> Vec<String> {
        let mut args = Vec::new();
        if self.no_sandbox {
            args.push("--no-sandbox".to_string());
        }
        if self.disable_dev_shm_usage {
            args.push("--disable-dev-shm-usage".to_string());
        }
        if self.disable_gpu {
            args.push("--disable-gpu".to_string());
        }
        if self.disable_extensions {
            args.push("--disable-extensions".to_string());
        }
        if self.disable_plugins {
            args.push("--disable-plugins".to_string());
        }
        if self.disable_images {
            args.push("--disable-images".to_string());
        }
        let (width, height) = self.window_size;
        args.push(format!("--window-size={width},{height}"));
        if headless {
            args.push("--headless=new".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Flags applied to Firefox sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirefoxFlags {
    /// Additional raw arguments
    pub extra_args: Vec<String>,
}

impl FirefoxFlags {
    /// Render the flag record as command-line arguments.
    #[must_use]
    pub fn args(&self, headless: bool) -> Vec<String> {
        let mut args = Vec::new();
        if headless {
            args.push("-headless".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Flags applied to Edge sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFlags {
    /// Disable the sandbox
    pub no_sandbox: bool,
    /// Write shared memory to /tmp instead of /dev/shm
    pub disable_dev_shm_usage: bool,
    /// Additional raw arguments
    pub extra_args: Vec<String>,
}

impl Default for EdgeFlags {
    fn default() -> Self {
        Self {
            no_sandbox: true,
            disable_dev_shm_usage: true,
            extra_args: Vec::new(),
        }
    }
}

impl EdgeFlags {
    /// Render the flag record as command-line arguments.
    #[must_use]
    pub fn args(&self, headless: bool) -> Vec<String> {
        let mut args = Vec::new();
        if self.no_sandbox {
            args.push("--no-sandbox".to_string());
        }
        if self.disable_dev_shm_usage {
            args.push("--disable-dev-shm-usage".to_string());
        }
        if headless {
            args.push("--headless".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Factory for creating WebDriver sessions.
#[derive(Debug, Clone, Default)]
pub struct DriverFactory {
    chrome: ChromeFlags,
    firefox: FirefoxFlags,
    edge: EdgeFlags,
}

impl DriverFactory {
    /// Create a factory with the default flag records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the Chrome flag record.
    #[must_use]
    pub fn with_chrome_flags(mut self, flags: ChromeFlags) -> Self {
        self.chrome = flags;
        self
    }

    /// Override the Firefox flag record.
    #[must_use]
    pub fn with_firefox_flags(mut self, flags: FirefoxFlags) -> Self {
        self.firefox = flags;
        self
    }

    /// Override the Edge flag record.
    #[must_use]
    pub fn with_edge_flags(mut self, flags: EdgeFlags) -> Self {
        self.edge = flags;
        self
    }

    /// Build capabilities for the configured browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the capability payload cannot be assembled.
    pub fn capabilities(&self, config: &HarnessConfig) -> ManejarResult<Capabilities> {
        let caps = match config.browser {
            BrowserKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                for arg in self.chrome.args(config.headless) {
                    caps.add_arg(&arg)?;
                }
                caps.into()
            }
            BrowserKind::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                for arg in self.firefox.args(config.headless) {
                    caps.add_arg(&arg)?;
                }
                caps.into()
            }
            BrowserKind::Edge => {
                let mut caps = DesiredCapabilities::edge();
                for arg in self.edge.args(config.headless) {
                    caps.add_arg(&arg)?;
                }
                caps.into()
            }
            BrowserKind::Safari => {
                if config.headless {
                    warn!("safaridriver does not support headless mode; launching visibly");
                }
                DesiredCapabilities::safari().into()
            }
        };

        Ok(caps)
    }

    /// Create a ready-to-use session: connect to the WebDriver server,
    /// then apply the configured timeouts and window size.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, the session cannot
    /// be created, or timeout configuration fails.
    pub async fn create(&self, config: &HarnessConfig) -> ManejarResult<WebDriver> {
        let caps = self.capabilities(config)?;
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;

        driver.set_page_load_timeout(config.page_load_timeout()).await?;
        driver.set_implicit_wait_timeout(config.implicit_wait()).await?;
        driver.set_script_timeout(config.explicit_wait()).await?;
        driver
            .set_window_rect(0, 0, config.window_width, config.window_height)
            .await?;

        info!(browser = %config.browser, headless = config.headless, "driver created");
        Ok(driver)
    }
}
