#![warn(missing_docs)]
//! MiniBench Core - Calibrated Runner and Result Model
//!
//! This crate provides everything needed to time a set of competing
//! implementations of one function:
//! - `BenchmarkTest` verifies a function once, calibrates an iteration count
//!   and performs the timed run
//! - `TestSuite` groups tests sharing an input and expected output
//! - `BenchmarkResult` / `ResultSuite` hold the timings, make them comparable
//!   through scores and rescaling, and render them as text tables
//! - `BenchmarkSettings` carries calibration and test times

mod benchmark;
mod columns;
mod error;
mod measure;
mod result;
mod result_suite;
mod settings;
mod suite;

pub use benchmark::{BenchmarkTest, project_iterations};
pub use columns::ResultColumns;
pub use error::{BenchError, Result};
pub use measure::{Timer, time_iterations};
pub use result::{BenchmarkResult, NANOS_PER_TICK, ScalingMode, find_best, find_best_flattened};
pub use result_suite::{ResultSuite, find_best_in_suites, format_duration};
pub use settings::{
    BenchmarkSettings, DEFAULT_CALIBRATION_TIME, DEFAULT_TEST_TIME, SettingsError, parse_seconds,
};
pub use suite::TestSuite;
