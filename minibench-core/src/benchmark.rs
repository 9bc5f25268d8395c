//! Calibrated Runner
//!
//! A [`BenchmarkTest`] pairs a function with its display name and knows how
//! to time it:
//!
//! ```text
//! verify once ──► calibrate (1, 2, 4, ... iterations until ≥ calibration_time)
//!                     │
//!                     ▼
//!            extrapolate to test_time ──► timed run ──► BenchmarkResult
//! ```
//!
//! Correctness is checked a single time up front so the timing loops never
//! need to look at the outputs again.

use crate::error::{BenchError, Result};
use crate::measure::time_iterations;
use crate::result::BenchmarkResult;
use crate::settings::BenchmarkSettings;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

type TestFn<I, O> = dyn Fn(&I) -> O + Send + Sync;

/// A single named function under test.
pub struct BenchmarkTest<I: ?Sized, O> {
    test: Arc<TestFn<I, O>>,
    name: String,
}

impl<I: ?Sized, O> Clone for BenchmarkTest<I, O> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
            name: self.name.clone(),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for BenchmarkTest<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkTest")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized, O> BenchmarkTest<I, O> {
    /// Wrap `test` under the given display name
    pub fn new<F>(test: F, name: impl Into<String>) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
            name: name.into(),
        }
    }

    /// Wrap a named function, using its own name as the description.
    ///
    /// Closures have no useful name of their own; give them one with [`new`](Self::new).
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self::new(test, fn_name::<F>())
    }

    /// Display name of the test
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function once
    pub fn call(&self, input: &I) -> O {
        (self.test)(input)
    }
}

impl<I: ?Sized, O: PartialEq> BenchmarkTest<I, O> {
    /// Verify the output for `input`, then calibrate and time the test.
    ///
    /// Fails with [`BenchError::TestFailure`] if the output differs from
    /// `expected`; in that case nothing is timed. Panics raised by the test
    /// function propagate to the caller.
    pub fn run(
        &self,
        input: &I,
        expected: &O,
        settings: &BenchmarkSettings,
    ) -> Result<BenchmarkResult> {
        let actual = self.call(input);
        if actual != *expected {
            return Err(BenchError::TestFailure {
                name: self.name.clone(),
            });
        }

        let (iterations, elapsed) = self.calibrate(input, settings.calibration_time());
        let iterations = project_iterations(iterations, elapsed, settings.test_time());
        tracing::debug!(test = %self.name, iterations, "projected iteration count");

        let elapsed = time_iterations(&*self.test, input, iterations);
        if elapsed > settings.test_time().saturating_mul(2) {
            tracing::warn!(
                test = %self.name,
                elapsed_ms = elapsed.as_millis() as u64,
                target_ms = settings.test_time().as_millis() as u64,
                "timed run overshot the target by more than 2x"
            );
        }
        let result = BenchmarkResult::new(self.name.clone(), elapsed, iterations)?;
        tracing::info!(
            test = %self.name,
            iterations,
            elapsed_ms = elapsed.as_millis() as u64,
            score = result.score(),
            "test complete"
        );
        Ok(result)
    }

    /// Double the iteration count until a run lasts at least `min_sample_time`.
    fn calibrate(&self, input: &I, min_sample_time: Duration) -> (u64, Duration) {
        let mut iterations: u64 = 1;
        let mut elapsed = time_iterations(&*self.test, input, iterations);
        while elapsed < min_sample_time {
            iterations = iterations.saturating_mul(2);
            elapsed = time_iterations(&*self.test, input, iterations);
            tracing::debug!(
                test = %self.name,
                iterations,
                elapsed_us = elapsed.as_micros() as u64,
                "calibration step"
            );
        }
        (iterations, elapsed)
    }
}

/// Upscale a calibration sample to the target time.
///
/// Computed in floating point so fast tests can't overflow; never returns less than one.
pub fn project_iterations(iterations: u64, elapsed: Duration, target: Duration) -> u64 {
    let elapsed_ns = elapsed.as_nanos().max(1) as f64;
    let projected = (target.as_nanos() as f64 / elapsed_ns) * iterations as f64;
    (projected as u64).max(1)
}

/// Last path segment of a function's type name, e.g. `join_with_concat`.
pub(crate) fn fn_name<F>() -> String {
    let full = std::any::type_name::<F>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}
