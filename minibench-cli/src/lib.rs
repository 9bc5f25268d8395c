#![warn(missing_docs)]
//! MiniBench CLI Library
//!
//! This module provides the command-line layer for benchmark binaries.
//! Build a [`Harness`] from the process arguments in your main function,
//! hand it each test suite and finish it once everything has run.
//!
//! # Example
//!
//! ```ignore
//! use minibench::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut harness = Harness::from_env()?;
//!     let suite = TestSuite::new("Sorting")
//!         .plus(|v: &[u32]| { let mut v = v.to_vec(); v.sort(); v }, "sort")
//!         .plus(|v: &[u32]| { let mut v = v.to_vec(); v.sort_unstable(); v }, "sort_unstable");
//!     let input: Vec<u32> = (0..1000).rev().collect();
//!     let expected: Vec<u32> = (0..1000).collect();
//!     harness.run_suite(&suite, &input[..], &expected)?;
//!     harness.finish()
//! }
//! ```

mod config;
mod executor;
mod harness;
mod planner;

pub use config::*;
pub use executor::{ExecutionConfig, Executor, ScaledSuite, format_human_output, format_plan};
pub use harness::Harness;
pub use planner::build_plan;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// MiniBench CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "minibench")]
#[command(author, version, about = "MiniBench - compare implementations of one function")]
pub struct Cli {
    /// Only run suites or tests whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table columns, e.g. "name,duration,score" or "all"
    #[arg(long)]
    pub columns: Option<String>,

    /// Scale results to the best one: duration, iterations or none
    #[arg(long)]
    pub scale: Option<String>,

    /// Show raw scores (ticks per iteration) instead of scores relative to the best result
    #[arg(long)]
    pub raw_scores: bool,

    /// Minimum calibration time in seconds
    #[arg(long)]
    pub calibration_time: Option<f64>,

    /// Target test time in seconds
    #[arg(long)]
    pub test_time: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run - list suites and tests without executing
    #[arg(long, alias = "list")]
    pub dry_run: bool,

    /// Write a default minibench.toml to the current directory
    #[arg(long)]
    pub init: bool,

    /// Internal: Absorb cargo bench's --bench flag
    #[arg(long, hide = true)]
    pub bench: bool,

    /// Settings tokens such as `/calibration-time:2` and `/test-time:30`
    pub args: Vec<String>,
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Installing twice is
/// harmless; the first subscriber stays in place.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "minibench=debug"
    } else if quiet {
        "minibench=warn"
    } else {
        "minibench=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
