//! Suite Planner
//!
//! Narrows a test suite down to what the `--filter` pattern selects:
//! - a suite whose name matches runs in full
//! - otherwise only tests whose names match are kept
//! - a suite left with no tests is skipped entirely
//!
//! Registration order is always preserved.

use minibench_core::TestSuite;
use regex::Regex;

/// Build the suite to execute, or `None` if the filter excludes everything
pub fn build_plan<I: ?Sized, O>(
    suite: &TestSuite<I, O>,
    filter: Option<&Regex>,
) -> Option<TestSuite<I, O>> {
    let planned = match filter {
        None => suite.clone(),
        Some(re) if re.is_match(suite.name()) => suite.clone(),
        Some(re) => suite.filtered(|test| re.is_match(test.name())),
    };

    if planned.is_empty() {
        tracing::debug!(suite = %suite.name(), "no tests selected");
        return None;
    }
    Some(planned)
}
