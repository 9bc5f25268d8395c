//! Test Suites
//!
//! A [`TestSuite`] is an immutable, ordered list of tests sharing one input
//! and expected output. It is built up by chaining [`TestSuite::plus`]:
//!
//! ```ignore
//! let suite = TestSuite::<str, usize>::new("String tests")
//!     .plus(|s: &str| s.len(), "len")
//!     .plus_fn(count_chars);
//! let results = suite.run_tests("hello", &5, &BenchmarkSettings::default())?;
//! ```
//!
//! Every `plus` returns a new suite; the receiver keeps its old contents.

use crate::benchmark::BenchmarkTest;
use crate::error::{BenchError, Result};
use crate::result_suite::ResultSuite;
use crate::settings::BenchmarkSettings;
use std::sync::Arc;

/// A named, append-only collection of benchmark tests
pub struct TestSuite<I: ?Sized, O> {
    name: String,
    tests: Vec<Arc<BenchmarkTest<I, O>>>,
}

impl<I: ?Sized, O> Clone for TestSuite<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            tests: self.tests.clone(),
        }
    }
}

impl<I: ?Sized, O> std::fmt::Debug for TestSuite<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSuite")
            .field("name", &self.name)
            .field("tests", &self.tests)
            .finish()
    }
}

impl<I: ?Sized, O> TestSuite<I, O> {
    /// Create an empty suite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tests in the suite
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the suite has no tests yet
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Iterate over the tests in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<BenchmarkTest<I, O>>> {
        self.tests.iter()
    }

    /// New suite with an extra test named `description`
    pub fn plus<F>(&self, test: F, description: impl Into<String>) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        self.plus_test(BenchmarkTest::new(test, description))
    }

    /// New suite with an extra test named after the function itself
    pub fn plus_fn<F>(&self, test: F) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        self.plus_test(BenchmarkTest::from_fn(test))
    }

    /// New suite with an extra, already constructed test
    pub fn plus_test(&self, test: impl Into<Arc<BenchmarkTest<I, O>>>) -> Self {
        let mut tests = Vec::with_capacity(self.tests.len() + 1);
        tests.extend(self.tests.iter().cloned());
        tests.push(test.into());
        Self {
            name: self.name.clone(),
            tests,
        }
    }

    /// Keep only the tests for which `keep` returns true
    pub fn filtered(&self, mut keep: impl FnMut(&BenchmarkTest<I, O>) -> bool) -> Self {
        Self {
            name: self.name.clone(),
            tests: self.tests.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }
}

impl<I: ?Sized, O: PartialEq> TestSuite<I, O> {
    /// Run every test in order and collect the results.
    ///
    /// Fails with [`BenchError::InvalidOperation`] for an empty suite. The
    /// first failing test aborts the whole run.
    pub fn run_tests(
        &self,
        input: &I,
        expected: &O,
        settings: &BenchmarkSettings,
    ) -> Result<ResultSuite> {
        self.run_tests_observed(input, expected, settings, |_, _| {})
    }

    /// Like [`run_tests`](Self::run_tests), calling `on_start` with each
    /// test's position before it runs.
    pub fn run_tests_observed(
        &self,
        input: &I,
        expected: &O,
        settings: &BenchmarkSettings,
        mut on_start: impl FnMut(usize, &BenchmarkTest<I, O>),
    ) -> Result<ResultSuite> {
        if self.tests.is_empty() {
            return Err(BenchError::InvalidOperation(
                "cannot run a test suite until it contains at least one test".to_string(),
            ));
        }
        tracing::debug!(suite = %self.name, tests = self.tests.len(), "running suite");

        let results = self
            .tests
            .iter()
            .enumerate()
            .map(|(index, test)| {
                on_start(index, test);
                test.run(input, expected, settings)
            })
            .collect::<Result<Vec<_>>>()?;
        ResultSuite::new(self.name.clone(), results)
    }
}

impl<'a, I: ?Sized, O> IntoIterator for &'a TestSuite<I, O> {
    type Item = &'a Arc<BenchmarkTest<I, O>>;
    type IntoIter = std::slice::Iter<'a, Arc<BenchmarkTest<I, O>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}
