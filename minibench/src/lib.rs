#![warn(missing_docs)]
//! # MiniBench
//!
//! A small harness for answering "which of these implementations is faster?"
//!
//! - **Verification first**: every test is run once and its output compared to
//!   the expected value before any timing happens
//! - **Calibration**: iteration counts double until a run lasts at least the
//!   calibration time, then are extrapolated to the target test time
//! - **Comparable results**: scores (ticks per iteration) and rescaling to a
//!   common iteration count or duration
//! - **Tables and reports**: aligned text tables, JSON and CSV
//!
//! ## Quick Start
//!
//! ```ignore
//! use minibench::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut harness = Harness::from_env()?;
//!     let suite = TestSuite::new("Summing")
//!         .plus(|v: &[u64]| v.iter().sum::<u64>(), "iter_sum")
//!         .plus(|v: &[u64]| v.iter().fold(0u64, |a, b| a + b), "fold");
//!     let input: Vec<u64> = (1..=1000).collect();
//!     harness.run_suite(&suite, &input[..], &500_500)?;
//!     harness.finish()
//! }
//! ```
//!
//! ## Without the harness
//!
//! ```ignore
//! let settings = BenchmarkSettings::parse(std::env::args())?;
//! let results = suite.run_tests(&input[..], &500_500, &settings)?;
//! results
//!     .scale_by_best(ScalingMode::VaryDuration)?
//!     .display(ResultColumns::NAME_AND_DURATION | ResultColumns::SCORE, Some(results.find_best()))?;
//! ```

// Re-export core types
pub use minibench_core::{
    BenchError, BenchmarkResult, BenchmarkSettings, BenchmarkTest, DEFAULT_CALIBRATION_TIME,
    DEFAULT_TEST_TIME, NANOS_PER_TICK, Result, ResultColumns, ResultSuite, ScalingMode,
    SettingsError, TestSuite, Timer, find_best, find_best_flattened, find_best_in_suites,
    format_duration, parse_seconds, project_iterations, time_iterations,
};

// Re-export report types
pub use minibench_report::{
    OutputFormat, Report, SuiteReport, generate_csv_report, generate_json_report,
};

// Re-export the command-line layer
pub use minibench_cli::{Cli, Harness, MiniConfig, init_logging};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkResult, BenchmarkSettings, Harness, ResultColumns, ResultSuite, ScalingMode,
        TestSuite,
    };
}
