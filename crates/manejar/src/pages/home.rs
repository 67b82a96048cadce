//! Home page.

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_object::{open_page, Page};
use crate::result::ManejarResult;
use tracing::info;

/// Fixed locator table for the home page.
#[derive(Debug, Clone)]
pub struct HomeLocators {
    /// Welcome banner
    pub welcome_message: Locator,
    /// User menu trigger
    pub user_menu: Locator,
    /// Logout link inside the user menu
    pub logout_link: Locator,
}

impl Default for HomeLocators {
    fn default() -> Self {
        Self {
            welcome_message: Locator::class_name("welcome-message"),
            user_menu: Locator::id("user-menu"),
            logout_link: Locator::link_text("Logout"),
        }
    }
}

/// The application's home page, shown after login.
#[derive(Debug)]
pub struct HomePage<'d> {
    driver: &'d PageDriver,
    locators: HomeLocators,
}

impl<'d> HomePage<'d> {
    /// Path of the home page relative to the base URL.
    pub const URL_PATH: &'static str = "/home";

    /// Create the page object over a live driver.
    #[must_use]
    pub fn new(driver: &'d PageDriver) -> Self {
        Self {
            driver,
            locators: HomeLocators::default(),
        }
    }

    /// Navigate to the home page and wait for it to load.
    pub async fn open(&self) -> ManejarResult<()> {
        open_page(self.driver, self).await
    }

    /// Text of the welcome banner.
    pub async fn welcome_message(&self) -> ManejarResult<String> {
        self.driver
            .element_text(&self.locators.welcome_message, None)
            .await
    }

    /// Open the user menu.
    pub async fn click_user_menu(&self) -> ManejarResult<()> {
        self.driver.click(&self.locators.user_menu).await
    }

    /// Log the current user out via the user menu.
    pub async fn logout(&self) -> ManejarResult<()> {
        info!("logging out");
        self.click_user_menu().await?;
        self.driver.click(&self.locators.logout_link).await
    }
}

impl Page for HomePage<'_> {
    fn url_path(&self) -> &str {
        Self::URL_PATH
    }

    fn page_name(&self) -> &str {
        "HomePage"
    }
}
