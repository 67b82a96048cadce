//! Page Object Model support.
//!
//! Pages are plain structs that borrow the [`PageDriver`] and pair a fixed
//! locator table with domain-level actions. There is no inheritance
//! hierarchy; the shared capability is the driver itself, injected at
//! construction.

use crate::driver::PageDriver;
use crate::result::ManejarResult;
use std::time::Duration;
use tracing::debug;

/// Trait for page objects representing a page in the application.
///
/// # Example
///
/// ```ignore
/// struct LoginPage<'d> {
///     driver: &'d PageDriver,
///     username_input: Locator,
/// }
///
/// impl Page for LoginPage<'_> {
///     fn url_path(&self) -> &str {
///         "/login"
///     }
/// }
/// ```
pub trait Page {
    /// Path of this page relative to the base URL (e.g., "/login").
    fn url_path(&self) -> &str;

    /// Check if the page is ready for interaction.
    fn is_loaded(&self) -> bool {
        true
    }

    /// Maximum wait for page load, in milliseconds.
    fn load_timeout_ms(&self) -> u64 {
        30_000
    }

    /// Page name for logging/debugging.
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Open a page: navigate to its URL and wait for the document to finish
/// loading.
///
/// # Errors
///
/// Returns a navigation error if the browser refuses the URL, or a
/// timeout if the page does not reach `readyState == "complete"` within
/// the page's load timeout.
pub async fn open_page<P: Page>(driver: &PageDriver, page: &P) -> ManejarResult<()> {
    let url = driver.config().page_url(page.url_path());
    debug!(page = page.page_name(), %url, "opening page");
    driver.goto(&url).await?;
    driver
        .wait_for_page_load(Some(Duration::from_millis(page.load_timeout_ms())))
        .await
}
