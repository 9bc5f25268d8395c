//! Benchmark Executor
//!
//! Runs suites and turns their results into output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! TestSuite (after planning)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Verify, calibrate and time each test, then scale
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable tables and plan listings
//! └─────────────┘
//! ```
//!
//! Machine-readable output is built by `minibench-report`.

mod execution;
mod formatting;

pub use execution::{ExecutionConfig, Executor, ScaledSuite};
pub use formatting::{format_human_output, format_plan};
