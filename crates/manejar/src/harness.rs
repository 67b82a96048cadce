//! Per-test session lifecycle and process-wide initialization.
//!
//! One browser session per test: the harness creates it, the test drives
//! it through page objects, and [`TestHarness::finish`] tears it down
//! exactly once, capturing a failure screenshot first when the outcome is
//! an error. Sessions are never shared across tests; parallelism comes
//! entirely from the test runner.

use crate::config::HarnessConfig;
use crate::driver::PageDriver;
use crate::factory::DriverFactory;
use crate::result::ManejarResult;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialize logging and artifact directories for the whole process.
///
/// Explicit one-time setup: creates the screenshots/reports/logs
/// directories and installs a tracing subscriber that writes to stderr and
/// to a per-run log file. Level defaults to `info` and is overridable via
/// `RUST_LOG`. Calling it again is a no-op for the subscriber (the first
/// one stays installed for the process lifetime); the directories are
/// re-created if missing.
///
/// Returns the path of the run's log file.
///
/// # Errors
///
/// Returns an I/O error if a directory or the log file cannot be created.
pub fn init_harness_logging(config: &HarnessConfig) -> ManejarResult<PathBuf> {
    std::fs::create_dir_all(&config.screenshots_dir)?;
    std::fs::create_dir_all(&config.reports_dir)?;
    std::fs::create_dir_all(&config.logs_dir)?;

    let log_path = config.logs_dir.join(log_file_name(&Local::now()));
    let log_file = std::fs::File::create(&log_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr.and(Arc::new(log_file)))
        .with_ansi(false)
        .finish();

    // Already-installed subscriber wins; this keeps repeat calls harmless.
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(log_path)
}

fn log_file_name(now: &chrono::DateTime<Local>) -> String {
    format!("test_log_{}.log", now.format("%Y%m%d_%H%M%S"))
}

/// One test's browser session, from setup to teardown.
pub struct TestHarness {
    config: HarnessConfig,
    driver: PageDriver,
    test_name: String,
}

impl std::fmt::Debug for TestHarness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHarness")
            .field("test_name", &self.test_name)
            .field("browser", &self.config.browser)
            .finish_non_exhaustive()
    }
}

impl TestHarness {
    /// Create the browser session for one test.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver factory cannot create a session.
    pub async fn start(
        test_name: impl Into<String>,
        config: HarnessConfig,
    ) -> ManejarResult<Self> {
        let test_name = test_name.into();
        info!(test = %test_name, browser = %config.browser, "starting test");
        let session = DriverFactory::new().create(&config).await?;
        let driver = PageDriver::new(session, config.clone());
        Ok(Self {
            config,
            driver,
            test_name,
        })
    }

    /// The live driver, for page objects and direct calls.
    #[must_use]
    pub const fn driver(&self) -> &PageDriver {
        &self.driver
    }

    /// The harness configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The test name this session belongs to.
    #[must_use]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Conclude the test: on a failed outcome, capture a
    /// `FAILED_{test_name}` screenshot (when enabled); then close the
    /// session. Teardown runs exactly once regardless of the outcome,
    /// and the original outcome is returned.
    pub async fn finish(self, outcome: ManejarResult<()>) -> ManejarResult<()> {
        if let Err(error) = &outcome {
            error!(test = %self.test_name, %error, "test failed");
            if self.config.screenshot_on_failure {
                let name = format!("FAILED_{}", self.test_name);
                match self.driver.save_screenshot(&name).await {
                    Ok(path) => info!(path = %path.display(), "failure screenshot captured"),
                    Err(capture_error) => {
                        warn!(%capture_error, "could not capture failure screenshot");
                    }
                }
            }
        }

        let quit_result = self.driver.quit().await;
        info!(test = %self.test_name, "finished test");

        match outcome {
            Err(error) => Err(error),
            Ok(()) => quit_result,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    mod logging_tests {
        use super::*;

        #[test]
        fn test_log_file_name_format() {
            let when = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
            assert_eq!(log_file_name(&when), "test_log_20250314_092653.log");
        }

        #[test]
        fn test_init_creates_directories_and_log_file() {
            let root = tempfile::tempdir().unwrap();
            let config = HarnessConfig {
                screenshots_dir: root.path().join("shots"),
                reports_dir: root.path().join("reports"),
                logs_dir: root.path().join("logs"),
                ..HarnessConfig::default()
            };

            let log_path = init_harness_logging(&config).unwrap();

            assert!(config.screenshots_dir.is_dir());
            assert!(config.reports_dir.is_dir());
            assert!(config.logs_dir.is_dir());
            assert!(log_path.is_file());
        }

        #[test]
        fn test_init_is_repeatable() {
            let root = tempfile::tempdir().unwrap();
            let config = HarnessConfig {
                screenshots_dir: root.path().join("shots"),
                reports_dir: root.path().join("reports"),
                logs_dir: root.path().join("logs"),
                ..HarnessConfig::default()
            };

            init_harness_logging(&config).unwrap();
            // The second call must not fail even though a subscriber is
            // already installed.
            init_harness_logging(&config).unwrap();
        }
    }
}
