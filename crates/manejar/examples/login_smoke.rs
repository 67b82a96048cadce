//! Smoke-run the login flow against a live WebDriver server and write an
//! HTML run report.
//!
//! ```text
//! WEBDRIVER_URL=http://localhost:4444 BASE_URL=http://localhost:8080 \
//!     cargo run -p manejar --example login_smoke
//! ```

use manejar::{
    ensure_contains, init_harness_logging, HarnessConfig, LoginPage, ManejarResult, RunReport,
    TestHarness, TestResultEntry,
};
use std::time::Instant;

#[tokio::main]
async fn main() -> ManejarResult<()> {
    let config = HarnessConfig::from_env()?;
    init_harness_logging(&config)?;

    let mut report = RunReport::new("Manejar Test Automation Report");
    let report_path = config.reports_dir.join("login_smoke.html");

    let started = Instant::now();
    let harness = TestHarness::start("login_smoke", config).await?;

    let outcome = async {
        let login = LoginPage::new(harness.driver());
        login.open().await?;
        login.login("testuser", "testpass").await?;

        let url = harness.driver().current_url().await?;
        ensure_contains(&url, "dashboard")
    }
    .await;

    let duration = started.elapsed();
    let entry = match &outcome {
        Ok(()) => TestResultEntry::passed("login_smoke", duration),
        Err(error) => TestResultEntry::failed("login_smoke", duration, error.to_string()),
    };
    report.record(entry);

    let result = harness.finish(outcome).await;

    report.generate_html(&report_path)?;
    println!("{}", report.summary());
    println!("report written to {}", report_path.display());

    result
}
