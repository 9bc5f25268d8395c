//! Integration tests for MiniBench
//!
//! These tests verify the end-to-end behavior of the benchmarking system:
//! suites are built, verified, calibrated, timed, scaled and rendered.

use clap::Parser;
use minibench::prelude::*;
use minibench::{BenchError, Cli, Report, find_best, find_best_flattened, generate_json_report};
use std::time::Duration;

fn fast_settings() -> BenchmarkSettings {
    BenchmarkSettings::new(Duration::from_millis(2), Duration::from_millis(6))
}

fn join_suite() -> TestSuite<[String], String> {
    TestSuite::new("Joining")
        .plus(|parts: &[String]| parts.concat(), "concat")
        .plus(|parts: &[String]| parts.join(""), "join")
        .plus(
            |parts: &[String]| {
                let mut out = String::new();
                for p in parts {
                    out.push_str(p);
                }
                out
            },
            "push_str",
        )
}

fn join_input() -> (Vec<String>, String) {
    let parts: Vec<String> = (0..50).map(|i| format!("part{}", i)).collect();
    let expected = parts.concat();
    (parts, expected)
}

/// Whole pipeline without the harness: run, scale by best, render
#[test]
fn test_suite_end_to_end() {
    let (parts, expected) = join_input();
    let results = join_suite()
        .run_tests(&parts[..], &expected, &fast_settings())
        .unwrap();

    assert_eq!(results.name(), "Joining");
    let names: Vec<_> = results.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["concat", "join", "push_str"]);
    for r in &results {
        assert!(r.iterations() >= 1);
        assert!(r.duration() > Duration::ZERO);
    }

    let scaled = results.scale_by_best(ScalingMode::VaryDuration).unwrap();
    let best = scaled.find_best();
    assert!(scaled.iter().all(|r| r.iterations() == best.iterations()));
    assert_eq!(best.scaled_score(Some(best)), 1.0);

    let table = scaled.to_table(
        ResultColumns::NAME_AND_DURATION | ResultColumns::SCORE,
        Some(best),
    );
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines[0], "============ Joining ============");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("concat  "));
    assert!(lines[3].starts_with("push_str"));
    assert_eq!(lines[4], "");
}

/// A wrong implementation stops the suite before anything is timed after it
#[test]
fn test_wrong_implementation_aborts_suite() {
    let (parts, expected) = join_input();
    let suite = join_suite().plus(|parts: &[String]| parts.join(","), "join_with_comma");
    let err = suite
        .run_tests(&parts[..], &expected, &fast_settings())
        .unwrap_err();
    assert_eq!(
        err,
        BenchError::TestFailure {
            name: "join_with_comma".to_string()
        }
    );
}

/// Running an empty suite is an invalid operation
#[test]
fn test_empty_suite_cannot_run() {
    let suite: TestSuite<[String], String> = TestSuite::new("Nothing");
    let err = suite
        .run_tests(&[], &String::new(), &fast_settings())
        .unwrap_err();
    assert!(matches!(err, BenchError::InvalidOperation(_)));
}

/// Scaling between modes follows the documented arithmetic
#[test]
fn test_scaling_examples() {
    let result = BenchmarkResult::new("r", Duration::from_secs(60), 5000).unwrap();
    let standard = BenchmarkResult::new("s", Duration::from_secs(30), 10000).unwrap();

    let by_duration = result
        .scale_to_standard(&standard, ScalingMode::VaryDuration)
        .unwrap();
    assert_eq!(by_duration.iterations(), 10000);
    assert_eq!(by_duration.duration(), Duration::from_secs(120));

    let by_iterations = result
        .scale_to_standard(&standard, ScalingMode::VaryIterations)
        .unwrap();
    assert_eq!(by_iterations.duration(), Duration::from_secs(30));
    assert_eq!(by_iterations.iterations(), 2500);
}

/// Best result lookup across flat and grouped collections
#[test]
fn test_find_best_across_groups() {
    let a = BenchmarkResult::new("a", Duration::from_millis(10), 10).unwrap();
    let b = BenchmarkResult::new("b", Duration::from_millis(10), 40).unwrap();
    let c = BenchmarkResult::new("c", Duration::from_millis(10), 20).unwrap();

    assert!(std::ptr::eq(find_best([&a, &b, &c]).unwrap(), &b));
    let groups = vec![vec![Some(&a)], vec![Some(&c)], vec![Some(&b)]];
    assert_eq!(find_best_flattened(groups).unwrap().name(), "b");

    let with_absent = vec![vec![Some(&a)], vec![None, Some(&c)], vec![Some(&b)]];
    assert!(find_best_flattened(with_absent).unwrap_err().is_invalid_argument());
    assert!(find_best(Vec::<&BenchmarkResult>::new()).is_err());
}

/// Slash-style tokens configure the runner; unrelated arguments are ignored
#[test]
fn test_settings_from_tokens() {
    let settings =
        BenchmarkSettings::parse(["sample.exe", "/calibration-time:0.25", "/test-time:1.5"])
            .unwrap();
    assert_eq!(settings.calibration_time(), Duration::from_millis(250));
    assert_eq!(settings.test_time(), Duration::from_millis(1500));
}

/// The harness collects every suite into one JSON report
#[test]
fn test_harness_json_report() {
    let cli = Cli::parse_from([
        "bench",
        "--quiet",
        "--format",
        "json",
        "/calibration-time:0.25",
        "/test-time:0.5",
        "--calibration-time",
        "0.002",
        "--test-time",
        "0.006",
    ]);
    let mut harness = Harness::from_cli(cli).unwrap();
    let settings = harness.settings();
    assert!(settings.calibration_time() < Duration::from_millis(3));
    assert!(settings.test_time() < Duration::from_millis(7));

    let (parts, expected) = join_input();
    let scaled = harness
        .run_suite(&join_suite(), &parts[..], &expected)
        .unwrap()
        .unwrap();
    assert_eq!(scaled.len(), 3);

    let json = generate_json_report(harness.report()).unwrap();
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.suites.len(), 1);
    assert_eq!(parsed.suites[0].name, "Joining");
    assert_eq!(parsed.suites[0].scaling.as_deref(), Some("vary-duration"));
    let best = parsed.suites[0]
        .results
        .iter()
        .find(|r| r.name == parsed.suites[0].best)
        .unwrap();
    assert_eq!(best.relative_score, 1.0);
}
