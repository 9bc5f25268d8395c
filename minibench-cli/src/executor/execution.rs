//! Suite Execution
//!
//! Runs one test suite at a time, strictly serially, with a progress
//! display on stderr. Tests are never run concurrently: any interleaving
//! would skew the wall-clock timings.
//!
//! ```text
//! TestSuite ──► Executor ──► ResultSuite ──► scaling ──► ScaledSuite
//!                  │
//!                  └── progress bar: current test, elapsed time
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use minibench_core::{BenchmarkResult, BenchmarkSettings, ResultSuite, ScalingMode, TestSuite};
use std::time::Duration;

/// Configuration for suite execution
#[derive(Debug, Clone, Copy)]
pub struct ExecutionConfig {
    /// Calibration and test times
    pub settings: BenchmarkSettings,
    /// Scaling applied to the finished suite
    pub scaling: Option<ScalingMode>,
    /// Show a progress bar while tests run
    pub show_progress: bool,
}

/// A finished suite, scaled according to the execution config
#[derive(Debug, Clone)]
pub struct ScaledSuite {
    /// The results after scaling
    pub results: ResultSuite,
    /// Scaling that produced `results`, if any
    pub scaling: Option<ScalingMode>,
}

impl ScaledSuite {
    /// The best result of the (scaled) suite
    pub fn best(&self) -> &BenchmarkResult {
        self.results.find_best()
    }
}

/// Executes test suites in-process
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Create an executor
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Run every test of `suite` and scale the results.
    ///
    /// The first failing test aborts the suite.
    pub fn execute<I: ?Sized, O: PartialEq>(
        &self,
        suite: &TestSuite<I, O>,
        input: &I,
        expected: &O,
    ) -> minibench_core::Result<ScaledSuite> {
        let pb = self.progress_bar(suite.len() as u64);
        pb.set_prefix(suite.name().to_string());

        let outcome = suite.run_tests_observed(input, expected, &self.config.settings, |i, test| {
            pb.set_position(i as u64);
            pb.set_message(test.name().to_string());
        });

        let results = match outcome {
            Ok(results) => {
                pb.set_position(suite.len() as u64);
                pb.finish_and_clear();
                results
            }
            Err(e) => {
                pb.abandon_with_message(format!("failed: {}", e));
                return Err(e);
            }
        };

        let results = match self.config.scaling {
            Some(mode) => results.scale_by_best(mode)?,
            None => results,
        };
        Ok(ScaledSuite {
            results,
            scaling: self.config.scaling,
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}
