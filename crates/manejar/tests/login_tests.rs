//! Login scenarios.
//!
//! These tests drive a live browser and the application under test, so
//! they are ignored by default. Run them against a WebDriver server with:
//!
//! ```text
//! WEBDRIVER_URL=http://localhost:4444 BASE_URL=http://localhost:8080 \
//!     cargo test -p manejar -- --ignored
//! ```

use manejar::{
    ensure, ensure_contains, init_harness_logging, HarnessConfig, LoginPage, ManejarResult,
    TestHarness,
};

async fn start(test_name: &str) -> ManejarResult<TestHarness> {
    let config = HarnessConfig::from_env()?;
    init_harness_logging(&config)?;
    TestHarness::start(test_name, config).await
}

#[tokio::test]
#[ignore = "requires a WebDriver server and the demo application"]
async fn successful_login_lands_on_dashboard() -> ManejarResult<()> {
    let harness = start("successful_login").await?;

    let outcome = async {
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.login("testuser", "testpass").await?;

        let url = harness.driver().current_url().await?;
        ensure_contains(&url, "dashboard")
    }
    .await;

    harness.finish(outcome).await
}

#[tokio::test]
#[ignore = "requires a WebDriver server and the demo application"]
async fn invalid_credentials_show_error() -> ManejarResult<()> {
    let harness = start("invalid_login").await?;

    let outcome = async {
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.login("invalid", "invalid").await?;

        ensure(
            login.is_error_displayed().await?,
            "error banner not displayed after invalid login",
        )?;
        let message = login.error_message().await?;
        ensure_contains(&message, "invalid")
    }
    .await;

    harness.finish(outcome).await
}

#[tokio::test]
#[ignore = "requires a WebDriver server and the demo application"]
async fn empty_fields_show_error_without_navigation() -> ManejarResult<()> {
    let harness = start("empty_fields_login").await?;

    let outcome = async {
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.click_login().await?;

        ensure(
            login.is_error_displayed().await?,
            "error banner not displayed after submitting empty form",
        )?;
        let url = harness.driver().current_url().await?;
        ensure_contains(&url, "login")
    }
    .await;

    harness.finish(outcome).await
}
