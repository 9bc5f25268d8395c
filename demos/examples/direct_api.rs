//! Using the Library Directly
//!
//! Runs a suite without the command-line harness:
//! - settings come straight from `/calibration-time:` and `/test-time:` tokens
//! - results are scaled by hand and displayed with chosen columns
//! - the best result across both scaling modes is looked up
//!
//! Run with: cargo run --example direct_api -p minibench-demos --release -- /test-time:2

use minibench::prelude::*;
use minibench::{find_best_in_suites, init_logging};

fn main() -> anyhow::Result<()> {
    init_logging(false, false);
    let settings = BenchmarkSettings::parse(std::env::args())?;

    let input: Vec<u64> = (1..=10_000).collect();
    let expected: u64 = input.iter().sum();

    let suite = TestSuite::new("Summing 10,000 integers")
        .plus(|v: &[u64]| v.iter().sum::<u64>(), "iter_sum")
        .plus(|v: &[u64]| v.iter().fold(0u64, |acc, x| acc + x), "fold")
        .plus_fn(indexed_loop)
        .plus(|v: &[u64]| v.chunks(4).map(|c| c.iter().sum::<u64>()).sum::<u64>(), "chunked");

    let results = suite.run_tests(&input[..], &expected, &settings)?;

    println!("As measured:");
    results.display(ResultColumns::ALL, None)?;

    let same_iterations = results.scale_by_best(ScalingMode::VaryDuration)?;
    println!("Same iteration count:");
    same_iterations.display(
        ResultColumns::NAME_AND_DURATION | ResultColumns::SCORE,
        Some(same_iterations.find_best()),
    )?;

    let same_duration = results.scale_by_best(ScalingMode::VaryIterations)?;
    println!("Same duration:");
    same_duration.display(ResultColumns::NAME_AND_ITERATIONS, None)?;

    let overall = find_best_in_suites([&same_iterations, &same_duration])?;
    println!("Fastest: {}", overall);
    Ok(())
}

fn indexed_loop(v: &[u64]) -> u64 {
    let mut total = 0;
    let mut i = 0;
    while i < v.len() {
        total += v[i];
        i += 1;
    }
    total
}
