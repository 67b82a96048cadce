//! Login page.

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_object::{open_page, Page};
use crate::result::ManejarResult;
use tracing::info;

/// Fixed locator table for the login page.
#[derive(Debug, Clone)]
pub struct LoginLocators {
    /// Username input field
    pub username_input: Locator,
    /// Password input field
    pub password_input: Locator,
    /// Form submit button
    pub login_button: Locator,
    /// Error message banner
    pub error_message: Locator,
}

impl Default for LoginLocators {
    fn default() -> Self {
        Self {
            username_input: Locator::id("username"),
            password_input: Locator::id("password"),
            login_button: Locator::xpath("//button[@type='submit']"),
            error_message: Locator::class_name("error-message"),
        }
    }
}

/// The application's login page.
#[derive(Debug)]
pub struct LoginPage<'d> {
    driver: &'d PageDriver,
    locators: LoginLocators,
}

impl<'d> LoginPage<'d> {
    /// Path of the login page relative to the base URL.
    pub const URL_PATH: &'static str = "/login";

    /// Create the page object over a live driver.
    #[must_use]
    pub fn new(driver: &'d PageDriver) -> Self {
        Self {
            driver,
            locators: LoginLocators::default(),
        }
    }

    /// Navigate to the login page and wait for it to load.
    pub async fn open(&self) -> ManejarResult<()> {
        open_page(self.driver, self).await
    }

    /// Enter the username.
    pub async fn enter_username(&self, username: &str) -> ManejarResult<()> {
        self.driver
            .type_text(&self.locators.username_input, username, true)
            .await
    }

    /// Enter the password.
    pub async fn enter_password(&self, password: &str) -> ManejarResult<()> {
        self.driver
            .type_text(&self.locators.password_input, password, true)
            .await
    }

    /// Click the login button.
    pub async fn click_login(&self) -> ManejarResult<()> {
        self.driver.click(&self.locators.login_button).await
    }

    /// Complete the login flow with the given credentials.
    pub async fn login(&self, username: &str, password: &str) -> ManejarResult<()> {
        info!(username, "logging in");
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login().await
    }

    /// Text of the error message banner.
    pub async fn error_message(&self) -> ManejarResult<String> {
        self.driver
            .element_text(&self.locators.error_message, None)
            .await
    }

    /// Whether the error message banner is currently displayed.
    pub async fn is_error_displayed(&self) -> ManejarResult<bool> {
        self.driver.is_visible(&self.locators.error_message).await
    }
}

impl Page for LoginPage<'_> {
    fn url_path(&self) -> &str {
        Self::URL_PATH
    }

    fn page_name(&self) -> &str {
        "LoginPage"
    }
}
