//! Home page scenarios: post-login content and logout.
//!
//! Ignored by default; see `login_tests.rs` for how to run them against a
//! live WebDriver server.

use manejar::{
    ensure_contains, init_harness_logging, HarnessConfig, HomePage, LoginPage, ManejarResult,
    TestHarness,
};

async fn start(test_name: &str) -> ManejarResult<TestHarness> {
    let config = HarnessConfig::from_env()?;
    init_harness_logging(&config)?;
    TestHarness::start(test_name, config).await
}

#[tokio::test]
#[ignore = "requires a WebDriver server and the demo application"]
async fn home_page_shows_welcome_message() -> ManejarResult<()> {
    let harness = start("home_page_elements").await?;

    let outcome = async {
        // Login first
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.login("testuser", "testpass").await?;

        let home = HomePage::new(harness.driver());
        home.open().await?;

        let welcome = home.welcome_message().await?;
        ensure_contains(&welcome, "welcome")
    }
    .await;

    harness.finish(outcome).await
}

#[tokio::test]
#[ignore = "requires a WebDriver server and the demo application"]
async fn logout_returns_to_login_page() -> ManejarResult<()> {
    let harness = start("logout_functionality").await?;

    let outcome = async {
        // Login first
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.login("testuser", "testpass").await?;

        let home = HomePage::new(harness.driver());
        home.open().await?;
        home.logout().await?;

        let url = harness.driver().current_url().await?;
        ensure_contains(&url, "login")
    }
    .await;

    harness.finish(outcome).await
}
