//! Benchmark Results
//!
//! A [`BenchmarkResult`] is the immutable record of one timed run: the test's
//! name, how long the run took and how many iterations it completed. Results
//! with different durations and iteration counts are made comparable through
//! their score (time per iteration) and by rescaling one result onto another.

use crate::error::{BenchError, Result};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Nanoseconds per score tick. Scores are expressed in 100ns ticks per iteration.
pub const NANOS_PER_TICK: u64 = 100;

/// How to rescale a result onto a standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingMode {
    /// All results share the standard's iteration count; durations vary.
    VaryDuration,
    /// All results share the standard's duration; iteration counts vary.
    VaryIterations,
}

impl FromStr for ScalingMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "duration" | "vary-duration" | "varyduration" => Ok(ScalingMode::VaryDuration),
            "iterations" | "vary-iterations" | "varyiterations" => Ok(ScalingMode::VaryIterations),
            other => Err(BenchError::invalid_argument(
                "mode",
                format!("unknown scaling mode '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingMode::VaryDuration => f.write_str("vary-duration"),
            ScalingMode::VaryIterations => f.write_str("vary-iterations"),
        }
    }
}

/// The result of running a benchmark test.
///
/// Duration and iteration count are always strictly positive and the name is
/// never empty. Equality and hashing cover all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchmarkResult {
    name: String,
    duration: Duration,
    iterations: u64,
}

impl BenchmarkResult {
    /// Create a result, validating that the name is non-empty, the duration
    /// is positive and at least one iteration ran.
    pub fn new(name: impl Into<String>, duration: Duration, iterations: u64) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(BenchError::invalid_argument("name", "must not be empty"));
        }
        if duration.is_zero() {
            return Err(BenchError::invalid_argument("duration", "must be positive"));
        }
        if iterations == 0 {
            return Err(BenchError::invalid_argument("iterations", "must not be zero"));
        }
        Ok(Self {
            name,
            duration,
            iterations,
        })
    }

    /// Create a result from a duration in (possibly negative) floating point seconds.
    pub fn from_secs_f64(name: impl Into<String>, secs: f64, iterations: u64) -> Result<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(BenchError::invalid_argument(
                "duration",
                format!("must be positive, got {}s", secs),
            ));
        }
        let duration = Duration::try_from_secs_f64(secs)
            .map_err(|e| BenchError::invalid_argument("duration", e.to_string()))?;
        Self::new(name, duration, iterations)
    }

    /// Name of the test
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration of the timed run
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of iterations executed
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Ticks (100ns) per iteration. Only meaningful relative to other scores;
    /// smaller is better.
    pub fn score(&self) -> f64 {
        let ticks = self.duration.as_nanos() as f64 / NANOS_PER_TICK as f64;
        ticks / self.iterations as f64
    }

    /// Score relative to `standard`, which is deemed to score exactly 1.0.
    ///
    /// Without a standard the raw score is returned.
    pub fn scaled_score(&self, standard: Option<&BenchmarkResult>) -> f64 {
        match standard {
            None => self.score(),
            // Avoid rounding noise when comparing a result with itself
            Some(standard) if std::ptr::eq(self, standard) => 1.0,
            Some(standard) => self.score() / standard.score(),
        }
    }

    /// Rescale this result so it can be compared directly with `standard`.
    ///
    /// Returns `self` borrowed when `standard` is this very result.
    pub fn scale_to_standard(
        &self,
        standard: &BenchmarkResult,
        mode: ScalingMode,
    ) -> Result<Cow<'_, BenchmarkResult>> {
        if std::ptr::eq(self, standard) {
            return Ok(Cow::Borrowed(self));
        }
        let scaled = match mode {
            ScalingMode::VaryDuration => {
                let factor = standard.iterations as f64 / self.iterations as f64;
                let nanos = (self.duration.as_nanos() as f64 * factor) as u64;
                BenchmarkResult::new(
                    self.name.clone(),
                    Duration::from_nanos(nanos),
                    standard.iterations,
                )?
            }
            ScalingMode::VaryIterations => {
                let factor =
                    standard.duration.as_nanos() as f64 / self.duration.as_nanos() as f64;
                let iterations = (self.iterations as f64 * factor) as u64;
                BenchmarkResult::new(self.name.clone(), standard.duration, iterations)?
            }
        };
        Ok(Cow::Owned(scaled))
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Duration={:?}; Iterations={}",
            self.name, self.duration, self.iterations
        )
    }
}

/// Find the result with the lowest score.
///
/// Items may be plain references or `Option`s; a `None` anywhere in the
/// sequence is rejected, as is an empty sequence. Ties go to the first
/// result encountered.
pub fn find_best<'a, I>(results: I) -> Result<&'a BenchmarkResult>
where
    I: IntoIterator,
    I::Item: Into<Option<&'a BenchmarkResult>>,
{
    let mut best: Option<&'a BenchmarkResult> = None;
    for result in results {
        let result = result
            .into()
            .ok_or_else(|| BenchError::invalid_argument("results", "absent result in sequence"))?;
        if best.is_none_or(|b| result.score() < b.score()) {
            best = Some(result);
        }
    }
    best.ok_or_else(|| {
        BenchError::invalid_argument("results", "empty sequence of results; no best exists")
    })
}

/// Find the best result across several groups of results, taken in order.
pub fn find_best_flattened<'a, S>(suites: S) -> Result<&'a BenchmarkResult>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Into<Option<&'a BenchmarkResult>>,
{
    find_best(suites.into_iter().flatten())
}
