//! The page driver: bounded-wait element lookup and interaction over one
//! WebDriver session.
//!
//! This is the only layer with failure-handling policy, and it has exactly
//! two rules:
//!
//! - a lookup that times out captures one diagnostic screenshot and fails
//!   with [`ManejarError::ElementNotFound`];
//! - a native click that raises falls back once to a script-based click.
//!
//! Everything else is a direct call-through to the WebDriver library.

use crate::config::HarnessConfig;
use crate::locator::Locator;
use crate::result::{ManejarError, ManejarResult};
use crate::wait::WaitOptions;
use base64::Engine;
use chrono::Local;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;
use thirtyfour::WindowHandle;
use tracing::{debug, warn};

/// Wrapper over one live browser session.
///
/// Owned by the test harness; page objects borrow it. Closing the session
/// consumes the driver, so it can only happen once.
pub struct PageDriver {
    driver: WebDriver,
    config: HarnessConfig,
}

impl std::fmt::Debug for PageDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDriver")
            .field("browser", &self.config.browser)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl PageDriver {
    /// Wrap an already-created WebDriver session.
    #[must_use]
    pub const fn new(driver: WebDriver, config: HarnessConfig) -> Self {
        Self { driver, config }
    }

    /// The harness configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Escape hatch to the underlying session.
    #[must_use]
    pub const fn session(&self) -> &WebDriver {
        &self.driver
    }

    fn wait_options(&self, timeout: Option<Duration>) -> WaitOptions {
        timeout.map_or_else(
            || WaitOptions::from_timeout(self.config.explicit_wait()),
            WaitOptions::from_timeout,
        )
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Navigation`] if the browser reports a
    /// navigation failure.
    pub async fn goto(&self, url: &str) -> ManejarResult<()> {
        debug!(%url, "navigating");
        self.driver
            .goto(url)
            .await
            .map_err(|e| ManejarError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    /// The current URL.
    pub async fn current_url(&self) -> ManejarResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// The page title.
    pub async fn title(&self) -> ManejarResult<String> {
        Ok(self.driver.title().await?)
    }

    /// Refresh the current page.
    pub async fn refresh(&self) -> ManejarResult<()> {
        Ok(self.driver.refresh().await?)
    }

    /// Navigate back in history.
    pub async fn back(&self) -> ManejarResult<()> {
        Ok(self.driver.back().await?)
    }

    /// Navigate forward in history.
    pub async fn forward(&self) -> ManejarResult<()> {
        Ok(self.driver.forward().await?)
    }

    /// Block until `document.readyState` is "complete".
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Timeout`] if the page does not finish
    /// loading within the timeout.
    pub async fn wait_for_page_load(&self, timeout: Option<Duration>) -> ManejarResult<()> {
        let opts = self.wait_options(timeout);
        let deadline = Instant::now() + opts.timeout();
        loop {
            let ret = self.driver.execute("return document.readyState;", vec![]).await?;
            if ret.json().as_str() == Some("complete") {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ManejarError::Timeout {
                    ms: opts.timeout_ms,
                    condition: "document.readyState == \"complete\"".to_string(),
                });
            }
            tokio::time::sleep(opts.poll_interval()).await;
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Find an element, waiting up to the explicit-wait timeout for it to
    /// be present.
    ///
    /// # Errors
    ///
    /// On timeout, captures one diagnostic screenshot and returns
    /// [`ManejarError::ElementNotFound`] carrying the locator and the
    /// screenshot path.
    pub async fn find(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<WebElement> {
        let opts = self.wait_options(timeout);
        match self
            .driver
            .query(locator.by())
            .wait(opts.timeout(), opts.poll_interval())
            .first()
            .await
        {
            Ok(element) => Ok(element),
            Err(error) => {
                debug!(%locator, %error, "lookup timed out");
                let screenshot = self.capture_lookup_failure(locator).await;
                Err(ManejarError::ElementNotFound {
                    locator: locator.to_string(),
                    timeout_ms: opts.timeout_ms,
                    screenshot,
                })
            }
        }
    }

    /// Find all elements matching the locator, waiting for at least one to
    /// be present. Returns an empty Vec if none appear within the timeout.
    pub async fn find_all(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<Vec<WebElement>> {
        let opts = self.wait_options(timeout);
        match self
            .driver
            .query(locator.by())
            .wait(opts.timeout(), opts.poll_interval())
            .first()
            .await
        {
            Ok(_) => Ok(self.driver.find_all(locator.by()).await?),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Check whether an element is present right now, without waiting.
    pub async fn is_present(&self, locator: &Locator) -> bool {
        self.driver.find(locator.by()).await.is_ok()
    }

    /// Check whether an element is present and displayed right now,
    /// without waiting.
    pub async fn is_visible(&self, locator: &Locator) -> ManejarResult<bool> {
        match self.driver.find(locator.by()).await {
            Ok(element) => Ok(element.is_displayed().await?),
            Err(_) => Ok(false),
        }
    }

    // =========================================================================
    // Condition waits
    // =========================================================================

    /// Wait for an element to be present and displayed.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Timeout`] if the element does not become
    /// visible within the timeout.
    pub async fn wait_visible(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<WebElement> {
        let opts = self.wait_options(timeout);
        self.driver
            .query(locator.by())
            .wait(opts.timeout(), opts.poll_interval())
            .and_displayed()
            .first()
            .await
            .map_err(|_| ManejarError::Timeout {
                ms: opts.timeout_ms,
                condition: format!("element {locator} to become visible"),
            })
    }

    /// Wait for an element to be absent or hidden.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Timeout`] if the element is still displayed
    /// when the timeout elapses.
    pub async fn wait_invisible(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<()> {
        let opts = self.wait_options(timeout);
        let deadline = Instant::now() + opts.timeout();
        loop {
            match self.driver.find(locator.by()).await {
                // Absent counts as invisible.
                Err(_) => return Ok(()),
                Ok(element) => match element.is_displayed().await {
                    Ok(false) => return Ok(()),
                    // A stale handle means the element left the DOM.
                    Err(_) => return Ok(()),
                    Ok(true) => {}
                },
            }
            if Instant::now() >= deadline {
                return Err(ManejarError::Timeout {
                    ms: opts.timeout_ms,
                    condition: format!("element {locator} to become invisible"),
                });
            }
            tokio::time::sleep(opts.poll_interval()).await;
        }
    }

    /// Wait for an element to be displayed and enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Timeout`] if the element does not become
    /// clickable within the timeout.
    pub async fn wait_clickable(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<WebElement> {
        let opts = self.wait_options(timeout);
        self.driver
            .query(locator.by())
            .wait(opts.timeout(), opts.poll_interval())
            .and_clickable()
            .first()
            .await
            .map_err(|_| ManejarError::Timeout {
                ms: opts.timeout_ms,
                condition: format!("element {locator} to become clickable"),
            })
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Click an element, waiting for it to become clickable first.
    ///
    /// If the native click raises, falls back exactly once to a
    /// script-based click; the fallback's error, if any, is the caller's.
    pub async fn click(&self, locator: &Locator) -> ManejarResult<()> {
        let element = self.wait_clickable(locator, None).await?;
        if let Err(error) = element.click().await {
            debug!(%locator, %error, "native click failed, falling back to script click");
            self.driver
                .execute("arguments[0].click();", vec![element.to_json()?])
                .await?;
        }
        Ok(())
    }

    /// Type text into an element, optionally clearing prior content.
    pub async fn type_text(
        &self,
        locator: &Locator,
        text: &str,
        clear: bool,
    ) -> ManejarResult<()> {
        let element = self.find(locator, None).await?;
        if clear {
            element.clear().await?;
        }
        element.send_keys(text).await?;
        Ok(())
    }

    /// Hover the pointer over an element.
    pub async fn hover(&self, locator: &Locator) -> ManejarResult<()> {
        let element = self.find(locator, None).await?;
        self.driver
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await?;
        Ok(())
    }

    /// Drag one element onto another.
    pub async fn drag_and_drop(
        &self,
        source: &Locator,
        target: &Locator,
    ) -> ManejarResult<()> {
        let source_element = self.find(source, None).await?;
        let target_element = self.find(target, None).await?;
        // Script-based drag works across browsers where native drag events
        // are flaky.
        source_element.js_drag_to(&target_element).await?;
        Ok(())
    }

    /// Scroll an element into view.
    pub async fn scroll_into_view(&self, locator: &Locator) -> ManejarResult<()> {
        let element = self.find(locator, None).await?;
        self.driver
            .execute("arguments[0].scrollIntoView(true);", vec![element.to_json()?])
            .await?;
        // scrollIntoView is asynchronous in the browser; give it a beat.
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(())
    }

    /// Get an element's visible text.
    pub async fn element_text(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> ManejarResult<String> {
        let element = self.find(locator, timeout).await?;
        Ok(element.text().await?)
    }

    /// Get an element attribute, if set.
    pub async fn element_attr(
        &self,
        locator: &Locator,
        attribute: &str,
        timeout: Option<Duration>,
    ) -> ManejarResult<Option<String>> {
        let element = self.find(locator, timeout).await?;
        Ok(element.attr(attribute).await?)
    }

    /// Execute JavaScript and return its result as JSON.
    pub async fn execute_script(&self, script: &str) -> ManejarResult<serde_json::Value> {
        let ret = self.driver.execute(script, vec![]).await?;
        Ok(ret.json().clone())
    }

    // =========================================================================
    // Frames and windows
    // =========================================================================

    /// Switch into the iframe matched by the locator.
    pub async fn enter_frame(&self, locator: &Locator) -> ManejarResult<()> {
        let element = self.find(locator, None).await?;
        element.enter_frame().await?;
        Ok(())
    }

    /// Switch to the parent frame.
    pub async fn enter_parent_frame(&self) -> ManejarResult<()> {
        Ok(self.driver.enter_parent_frame().await?)
    }

    /// Switch back to the top-level document.
    pub async fn enter_default_frame(&self) -> ManejarResult<()> {
        Ok(self.driver.enter_default_frame().await?)
    }

    /// Handles for all open windows/tabs.
    pub async fn window_handles(&self) -> ManejarResult<Vec<String>> {
        let windows = self.driver.windows().await?;
        Ok(windows.into_iter().map(|w| w.to_string()).collect())
    }

    /// Switch to the window with the given handle.
    pub async fn switch_to_window(&self, handle: &str) -> ManejarResult<()> {
        let handle = WindowHandle::from(handle.to_string());
        Ok(self.driver.switch_to_window(handle).await?)
    }

    // =========================================================================
    // Screenshots and teardown
    // =========================================================================

    /// Capture a screenshot into the configured directory.
    ///
    /// The file name is `{name}_{YYYYMMDD_HHMMSS}.png` with the name
    /// sanitized for the filesystem. The directory is created on demand.
    ///
    /// # Errors
    ///
    /// Returns [`ManejarError::Screenshot`] if the payload cannot be
    /// decoded, or an I/O error if the file cannot be written.
    pub async fn save_screenshot(&self, name: &str) -> ManejarResult<PathBuf> {
        std::fs::create_dir_all(&self.config.screenshots_dir)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self
            .config
            .screenshots_dir
            .join(format!("{}_{stamp}.png", sanitize_name(name)));

        let payload = self.driver.screenshot_as_png_base64().await?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ManejarError::Screenshot {
                message: format!("invalid PNG payload: {e}"),
            })?;
        std::fs::write(&path, bytes)?;
        debug!(path = %path.display(), "screenshot saved");
        Ok(path)
    }

    /// Close the browser session. Consumes the driver, so teardown can
    /// only happen once.
    pub async fn quit(self) -> ManejarResult<()> {
        Ok(self.driver.quit().await?)
    }

    async fn capture_lookup_failure(&self, locator: &Locator) -> Option<PathBuf> {
        let name = format!("element_not_found_{}", locator.selector());
        match self.save_screenshot(&name).await {
            Ok(path) => Some(path),
            Err(error) => {
                warn!(%locator, %error, "could not capture lookup-failure screenshot");
                None
            }
        }
    }
}

/// Replace filesystem-hostile characters in a screenshot name.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod sanitize_tests {
        use super::*;

        #[test]
        fn test_plain_names_pass_through() {
            assert_eq!(sanitize_name("FAILED_login_test"), "FAILED_login_test");
        }

        #[test]
        fn test_selector_characters_are_replaced() {
            assert_eq!(
                sanitize_name("//button[@type='submit']"),
                "__button__type__submit__"
            );
            assert_eq!(sanitize_name("error message"), "error_message");
        }

        #[test]
        fn test_dashes_survive() {
            assert_eq!(sanitize_name("error-message"), "error-message");
        }
    }
}
