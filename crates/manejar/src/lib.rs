//! Manejar: WebDriver UI Test Harness
//!
//! Manejar (Spanish: "to drive") wraps the `thirtyfour` WebDriver client
//! with the pieces a page-object test suite needs: a driver factory, a
//! bounded-wait interaction layer, Page Object Model support, and a
//! per-test harness with screenshot-on-failure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    MANEJAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Driver     │    │ Page       │    │ Page       │            │
//! │   │ Factory    │───►│ Driver     │───►│ Objects    │            │
//! │   │ (browsers) │    │ (waits)    │    │ (actions)  │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! │         configuration · harness · reporter                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tests create a [`TestHarness`] per test, drive the app through page
//! objects, and hand the outcome back to [`TestHarness::finish`], which
//! captures a failure screenshot and always closes the session.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Scenario assertion helpers
pub mod assertion;
/// Harness configuration and browser selection
pub mod config;
/// Bounded-wait element lookup and interaction
pub mod driver;
/// Browser session factory
pub mod factory;
/// Per-test session lifecycle and process-wide init
pub mod harness;
/// Locator abstraction
pub mod locator;
/// Page Object Model support
pub mod page_object;
/// Page objects for the application under test
pub mod pages;
/// Run reporting
pub mod reporter;
/// Result and error types
pub mod result;
/// Wait options
pub mod wait;

pub use assertion::{ensure, ensure_contains};
pub use config::{BrowserKind, HarnessConfig};
pub use driver::PageDriver;
pub use factory::{ChromeFlags, DriverFactory, EdgeFlags, FirefoxFlags};
pub use harness::{init_harness_logging, TestHarness};
pub use locator::{Locator, Strategy};
pub use page_object::{open_page, Page};
pub use pages::{HomePage, LoginPage};
pub use reporter::{RunReport, TestResultEntry, TestStatus};
pub use result::{ManejarError, ManejarResult};
pub use wait::WaitOptions;
