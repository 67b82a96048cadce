//! Scenario assertions that flow through the harness teardown path.
//!
//! Test bodies return `ManejarResult<()>` so the harness can observe the
//! outcome, capture a failure screenshot, and still tear the session down.
//! These helpers turn boolean checks into [`ManejarError::Assertion`]
//! values instead of panicking mid-scenario.

use crate::result::{ManejarError, ManejarResult};

/// Fail the scenario with the given message unless the condition holds.
///
/// # Errors
///
/// Returns [`ManejarError::Assertion`] when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> ManejarResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ManejarError::Assertion {
            message: message.into(),
        })
    }
}

/// Fail the scenario unless `haystack` contains `needle`
/// (case-insensitive).
///
/// # Errors
///
/// Returns [`ManejarError::Assertion`] describing both strings when the
/// needle is absent.
pub fn ensure_contains(haystack: &str, needle: &str) -> ManejarResult<()> {
    if haystack.to_lowercase().contains(&needle.to_lowercase()) {
        Ok(())
    } else {
        Err(ManejarError::Assertion {
            message: format!("expected '{haystack}' to contain '{needle}'"),
        })
    }
}
