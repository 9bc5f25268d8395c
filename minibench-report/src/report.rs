//! Report Data Structures

use chrono::{DateTime, Utc};
use minibench_core::{BenchmarkSettings, ResultSuite, ScalingMode, format_duration};
use serde::{Deserialize, Serialize};

/// Version of the JSON layout below
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Suites in the order they were run
    pub suites: Vec<SuiteReport>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Layout version, see [`SCHEMA_VERSION`]
    pub schema_version: u32,
    /// MiniBench version that produced the report
    pub version: String,
    /// When the report was created
    pub timestamp: DateTime<Utc>,
    /// Runner settings in effect
    pub config: ReportConfig,
}

/// Runner configuration captured in report metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Minimum calibration run length
    pub calibration_time_ns: u64,
    /// Target timed run length
    pub test_time_ns: u64,
}

/// One suite's results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name
    pub name: String,
    /// Scaling applied before reporting, if any
    pub scaling: Option<String>,
    /// Name of the best (lowest score) result
    pub best: String,
    /// Results in registration order
    pub results: Vec<ResultEntry>,
}

/// A single result row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Test name
    pub name: String,
    /// Iterations in the (scaled) run
    pub iterations: u64,
    /// Duration of the (scaled) run
    pub duration_ns: u64,
    /// Duration as `M:SS.mmm`
    pub duration: String,
    /// Ticks (100ns) per iteration
    pub score: f64,
    /// Score relative to the suite's best result
    pub relative_score: f64,
}

impl Report {
    /// Create an empty report stamped with the current time
    pub fn new(settings: &BenchmarkSettings) -> Self {
        Self {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now(),
                config: ReportConfig {
                    calibration_time_ns: settings.calibration_time().as_nanos() as u64,
                    test_time_ns: settings.test_time().as_nanos() as u64,
                },
            },
            suites: Vec::new(),
        }
    }

    /// Append a suite
    pub fn push_suite(&mut self, suite: &ResultSuite, scaling: Option<ScalingMode>) {
        self.suites.push(SuiteReport::from_suite(suite, scaling));
    }

    /// Total number of results across all suites
    pub fn result_count(&self) -> usize {
        self.suites.iter().map(|s| s.results.len()).sum()
    }
}

impl SuiteReport {
    /// Build a suite report; relative scores use the suite's best result as 1.0
    pub fn from_suite(suite: &ResultSuite, scaling: Option<ScalingMode>) -> Self {
        let best = suite.find_best();
        let results = suite
            .iter()
            .map(|r| ResultEntry {
                name: r.name().to_string(),
                iterations: r.iterations(),
                duration_ns: r.duration().as_nanos() as u64,
                duration: format_duration(r.duration()),
                score: r.score(),
                relative_score: r.scaled_score(Some(best)),
            })
            .collect();

        Self {
            name: suite.name().to_string(),
            scaling: scaling.map(|m| m.to_string()),
            best: best.name().to_string(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibench_core::BenchmarkResult;
    use std::time::Duration;

    fn suite() -> ResultSuite {
        ResultSuite::new(
            "joins",
            [
                BenchmarkResult::new("concat", Duration::from_millis(4), 100).unwrap(),
                BenchmarkResult::new("builder", Duration::from_millis(1), 100).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_suite_report_relative_to_best() {
        let report = SuiteReport::from_suite(&suite(), Some(ScalingMode::VaryDuration));
        assert_eq!(report.best, "builder");
        assert_eq!(report.scaling.as_deref(), Some("vary-duration"));
        assert_eq!(report.results[0].duration, "0:00.004");
        assert!((report.results[0].relative_score - 4.0).abs() < 1e-9);
        assert_eq!(report.results[1].relative_score, 1.0);
    }

    #[test]
    fn test_report_captures_settings() {
        let settings = BenchmarkSettings::new(Duration::from_secs(1), Duration::from_secs(3));
        let mut report = Report::new(&settings);
        report.push_suite(&suite(), None);
        assert_eq!(report.meta.schema_version, SCHEMA_VERSION);
        assert_eq!(report.meta.config.test_time_ns, 3_000_000_000);
        assert_eq!(report.result_count(), 2);
    }
}
