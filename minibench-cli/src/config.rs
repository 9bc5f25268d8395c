//! Configuration loading from minibench.toml
//!
//! MiniBench configuration can be specified in a `minibench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use anyhow::Context;
use minibench_core::{BenchmarkSettings, ResultColumns, ScalingMode};
use minibench_report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file looked up by [`MiniConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "minibench.toml";

/// MiniBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MiniConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Minimum calibration sample time (e.g., "2s")
    #[serde(default = "default_calibration")]
    pub calibration_time: String,
    /// Target duration of each timed run (e.g., "30s")
    #[serde(default = "default_test_time")]
    pub test_time: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            calibration_time: default_calibration(),
            test_time: default_test_time(),
        }
    }
}

fn default_calibration() -> String {
    "2s".to_string()
}
fn default_test_time() -> String {
    "30s".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Columns shown in human output
    #[serde(default = "default_columns")]
    pub columns: String,
    /// Scaling applied before display: "duration", "iterations" or "none"
    #[serde(default = "default_scaling")]
    pub scaling: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            columns: default_columns(),
            scaling: default_scaling(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_columns() -> String {
    "name,duration,score".to_string()
}
fn default_scaling() -> String {
    "duration".to_string()
}

impl MiniConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let Ok(mut dir) = std::env::current_dir() else {
            return Ok(None);
        };
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return Self::load(&config_path).map(Some);
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Runner settings described by this configuration
    pub fn settings(&self) -> anyhow::Result<BenchmarkSettings> {
        let calibration = Self::parse_duration(&self.runner.calibration_time)
            .context("runner.calibration_time")?;
        let test = Self::parse_duration(&self.runner.test_time).context("runner.test_time")?;
        Ok(BenchmarkSettings::new(calibration, test))
    }

    /// Configured output format
    pub fn format(&self) -> anyhow::Result<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(|e: String| anyhow::anyhow!("output.format: {}", e))
    }

    /// Configured table columns
    pub fn columns(&self) -> anyhow::Result<ResultColumns> {
        self.output
            .columns
            .parse::<ResultColumns>()
            .context("output.columns")
    }

    /// Configured scaling mode (`None` means results are shown as measured)
    pub fn scaling(&self) -> anyhow::Result<Option<ScalingMode>> {
        parse_scaling(&self.output.scaling).context("output.scaling")
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# MiniBench Configuration

[runner]
# Minimum time a calibration run must last before extrapolating
calibration_time = "2s"
# Target duration of each timed run
test_time = "30s"

[output]
# Output format: human, json, csv
format = "human"
# Columns for human output: name, iterations, duration, score, all
columns = "name,duration,score"
# Scale results to the best one before display: duration, iterations, none
scaling = "duration"
"#
        .to_string()
    }

    /// Parse duration string (e.g., "3s", "500ms", "2m") into a [`Duration`]
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic() || *c == 'µ')
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

        let multiplier: f64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" | "" => 1.0,
            "m" | "min" => 60.0,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Duration::try_from_secs_f64(value * multiplier)
            .map_err(|e| anyhow::anyhow!("Duration out of range: {} ({})", s, e))
    }
}

/// Parse a scaling mode name, accepting "none" for no scaling
pub fn parse_scaling(s: &str) -> minibench_core::Result<Option<ScalingMode>> {
    match s.trim().to_lowercase().as_str() {
        "none" | "off" => Ok(None),
        other => other.parse().map(Some),
    }
}
