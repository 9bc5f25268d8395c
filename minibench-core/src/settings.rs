//! Benchmark Settings
//!
//! The two knobs of the calibrated runner, and the slash-style flag parser
//! that produces them from command-line tokens:
//!
//! - `/calibration-time:<seconds>`
//! - `/test-time:<seconds>`

use std::time::Duration;
use thiserror::Error;

/// Default minimum sample time before a throughput estimate is trusted
pub const DEFAULT_CALIBRATION_TIME: Duration = Duration::from_secs(2);

/// Default target duration of the final timed run
pub const DEFAULT_TEST_TIME: Duration = Duration::from_secs(30);

const CALIBRATION_TIME_FLAG: &str = "/calibration-time:";
const TEST_TIME_FLAG: &str = "/test-time:";

/// Errors from parsing settings tokens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// The value after a recognised flag is not a number
    #[error("invalid value for {flag}: '{value}' is not a number of seconds")]
    InvalidValue {
        /// The recognised flag
        flag: &'static str,
        /// The text that failed to parse
        value: String,
    },

    /// The value parsed but cannot be represented as a duration
    #[error("value for {flag} out of range: {seconds}")]
    OutOfRange {
        /// The recognised flag
        flag: &'static str,
        /// The parsed number of seconds
        seconds: f64,
    },
}

/// Settings for running benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSettings {
    calibration_time: Duration,
    test_time: Duration,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            calibration_time: DEFAULT_CALIBRATION_TIME,
            test_time: DEFAULT_TEST_TIME,
        }
    }
}

impl BenchmarkSettings {
    /// Create settings with explicit times
    pub fn new(calibration_time: Duration, test_time: Duration) -> Self {
        Self {
            calibration_time,
            test_time,
        }
    }

    /// How long a test must run before we extrapolate the iteration count
    /// needed to reach [`test_time`](Self::test_time).
    pub fn calibration_time(&self) -> Duration {
        self.calibration_time
    }

    /// How long each timed run aims to last
    pub fn test_time(&self) -> Duration {
        self.test_time
    }

    /// Copy of these settings with a different calibration time
    pub fn with_calibration_time(self, calibration_time: Duration) -> Self {
        Self {
            calibration_time,
            ..self
        }
    }

    /// Copy of these settings with a different test time
    pub fn with_test_time(self, test_time: Duration) -> Self {
        Self { test_time, ..self }
    }

    /// Parse settings from tokens, starting from the defaults.
    pub fn parse<I, S>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().overlay(args)
    }

    /// Apply recognised flags from `args` on top of `self`.
    ///
    /// Unrecognised tokens are ignored; a recognised flag with a bad value is an error.
    pub fn overlay<I, S>(self, args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = self;
        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix(CALIBRATION_TIME_FLAG) {
                settings.calibration_time = parse_seconds(CALIBRATION_TIME_FLAG, value)?;
            } else if let Some(value) = arg.strip_prefix(TEST_TIME_FLAG) {
                settings.test_time = parse_seconds(TEST_TIME_FLAG, value)?;
            }
        }
        Ok(settings)
    }
}

/// Parse floating point seconds into a duration
pub fn parse_seconds(flag: &'static str, value: &str) -> Result<Duration, SettingsError> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidValue {
            flag,
            value: value.to_string(),
        })?;
    Duration::try_from_secs_f64(seconds).map_err(|_| SettingsError::OutOfRange { flag, seconds })
}
