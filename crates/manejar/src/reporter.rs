//! Run reporting.
//!
//! Collects per-test results over a run and renders them as an HTML
//! report in the reports directory, plus a JSON dump for tooling.

use crate::result::ManejarResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

/// Test result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test was skipped
    Skipped,
}

impl TestStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Check if status is failing
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Label used in the HTML report
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Individual test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResultEntry {
    /// Test name
    pub name: String,
    /// Test status
    pub status: TestStatus,
    /// Duration of test execution
    pub duration: Duration,
    /// Error message if failed
    pub error: Option<String>,
    /// Failure screenshot path, if one was captured
    pub screenshot: Option<PathBuf>,
    /// When the test completed
    pub finished_at: DateTime<Utc>,
}

impl TestResultEntry {
    /// Create a passing test result
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Passed,
            duration,
            error: None,
            screenshot: None,
            finished_at: Utc::now(),
        }
    }

    /// Create a failing test result
    #[must_use]
    pub fn failed(name: impl Into<String>, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Failed,
            duration,
            error: Some(error.into()),
            screenshot: None,
            finished_at: Utc::now(),
        }
    }

    /// Create a skipped test result
    #[must_use]
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            error: None,
            screenshot: None,
            finished_at: Utc::now(),
        }
    }

    /// Attach a failure screenshot path
    #[must_use]
    pub fn with_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(path.into());
        self
    }
}

/// Collector for one run's results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier
    pub run_id: Uuid,
    /// Run title
    pub name: String,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Collected results
    results: Vec<TestResultEntry>,
}

impl RunReport {
    /// Start a new report
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            name: name.into(),
            started_at: Utc::now(),
            results: Vec::new(),
        }
    }

    /// Record a test result
    pub fn record(&mut self, result: TestResultEntry) {
        self.results.push(result);
    }

    /// Number of passed tests
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_passed()).count()
    }

    /// Number of failed tests
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_failed()).count()
    }

    /// Total number of results
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    /// Pass rate in [0, 1]; 1.0 for an empty run
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 1.0;
        }
        self.passed_count() as f64 / self.results.len() as f64
    }

    /// Whether every recorded test passed or was skipped
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// Sum of all test durations
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.results.iter().map(|r| r.duration).sum()
    }

    /// All recorded results
    #[must_use]
    pub fn results(&self) -> &[TestResultEntry] {
        &self.results
    }

    /// Only the failing results
    #[must_use]
    pub fn failures(&self) -> Vec<&TestResultEntry> {
        self.results.iter().filter(|r| r.status.is_failed()).collect()
    }

    /// One-line run summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} passed, {} failed, {} total ({:.1}s)",
            self.name,
            self.passed_count(),
            self.failed_count(),
            self.total_count(),
            self.total_duration().as_secs_f64()
        )
    }

    /// Render the report as an HTML document
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{} - Test Report</title>\n", self.name));
        html.push_str("<style>\n");
        html.push_str("body { font-family: sans-serif; margin: 2em; }\n");
        html.push_str("table { border-collapse: collapse; width: 100%; }\n");
        html.push_str("th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }\n");
        html.push_str(".passed { color: #2e7d32; }\n");
        html.push_str(".failed { color: #c62828; }\n");
        html.push_str(".skipped { color: #757575; }\n");
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", self.name));
        html.push_str(&format!(
            "<p>Run {} started {}</p>\n",
            self.run_id,
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        html.push_str(&format!("<p>{}</p>\n", self.summary()));
        html.push_str("<table>\n<tr><th>Test</th><th>Status</th><th>Duration</th><th>Error</th><th>Screenshot</th></tr>\n");
        for result in &self.results {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"{status}\">{status}</td><td>{:.2}s</td><td>{}</td><td>{}</td></tr>\n",
                result.name,
                result.duration.as_secs_f64(),
                result.error.as_deref().unwrap_or(""),
                result
                    .screenshot
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                status = result.status.label(),
            ));
        }
        html.push_str("</table>\n</body>\n</html>\n");
        html
    }

    /// Write the HTML report to a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn generate_html(&self, output_path: &Path) -> ManejarResult<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, self.render_html())?;
        Ok(())
    }

    /// Write the report as JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_json(&self, output_path: &Path) -> ManejarResult<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}
