//! Benchmark Harness
//!
//! Ties the pieces together for a benchmark binary:
//!
//! ```text
//! args ──► Cli ──┐
//! minibench.toml ┴─► Harness ──► run_suite (plan, execute, scale, render)
//!                                    │
//!                                    ▼
//!                                  finish
//! ```
//!
//! Settings are layered: built-in defaults, then `minibench.toml`, then
//! slash-style tokens (`/test-time:5`), then the long flags.

use crate::config::{CONFIG_FILE_NAME, MiniConfig, parse_scaling};
use crate::executor::{ExecutionConfig, Executor, format_human_output, format_plan};
use crate::planner::build_plan;
use crate::{Cli, init_logging};
use anyhow::Context;
use clap::Parser;
use minibench_core::{BenchmarkSettings, ResultColumns, ResultSuite, ScalingMode, TestSuite};
use minibench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Run,
    List,
    Idle,
}

/// Runs test suites according to command-line options and configuration
#[derive(Debug)]
pub struct Harness {
    settings: BenchmarkSettings,
    format: OutputFormat,
    columns: ResultColumns,
    scaling: Option<ScalingMode>,
    raw_scores: bool,
    filter: Option<Regex>,
    mode: Mode,
    show_progress: bool,
    output: Option<PathBuf>,
    report: Report,
    human: String,
    listed_any: bool,
}

impl Harness {
    /// Build a harness from the process arguments
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Build a harness from parsed arguments
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        init_logging(cli.verbose, cli.quiet);

        let mut mode = if cli.dry_run { Mode::List } else { Mode::Run };
        if cli.init {
            write_default_config(Path::new(CONFIG_FILE_NAME))?;
            println!("Created {}", CONFIG_FILE_NAME);
            mode = Mode::Idle;
        }

        let config = MiniConfig::discover()?.unwrap_or_default();
        let settings = resolve_settings(&cli, &config)?;

        let format = match cli.format.as_deref() {
            Some(f) => f
                .parse()
                .map_err(|e: String| anyhow::anyhow!("--format: {}", e))?,
            None => config.format()?,
        };
        let columns = match cli.columns.as_deref() {
            Some(c) => c.parse().context("--columns")?,
            None => config.columns()?,
        };
        let scaling = match cli.scale.as_deref() {
            Some(s) => parse_scaling(s).context("--scale")?,
            None => config.scaling()?,
        };
        let filter = cli
            .filter
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("invalid --filter pattern")?;

        tracing::debug!(
            calibration = ?settings.calibration_time(),
            test = ?settings.test_time(),
            ?format,
            ?scaling,
            "harness configured"
        );

        Ok(Self {
            settings,
            format,
            columns,
            scaling,
            raw_scores: cli.raw_scores,
            filter,
            mode,
            show_progress: !cli.quiet && !format.is_deferred(),
            output: cli.output,
            report: Report::new(&settings),
            human: String::new(),
            listed_any: false,
        })
    }

    /// Effective calibration and test times
    pub fn settings(&self) -> BenchmarkSettings {
        self.settings
    }

    /// Selected output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Selected table columns
    pub fn columns(&self) -> ResultColumns {
        self.columns
    }

    /// Scaling applied to each finished suite
    pub fn scaling(&self) -> Option<ScalingMode> {
        self.scaling
    }

    /// Report accumulated so far
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Run `suite` against `input`, checking each test's output against `expected`.
    ///
    /// Returns the scaled results, or `None` when the suite was listed,
    /// filtered out or not run at all.
    pub fn run_suite<I: ?Sized, O: PartialEq>(
        &mut self,
        suite: &TestSuite<I, O>,
        input: &I,
        expected: &O,
    ) -> anyhow::Result<Option<ResultSuite>> {
        if self.mode == Mode::Idle {
            return Ok(None);
        }
        let Some(plan) = build_plan(suite, self.filter.as_ref()) else {
            return Ok(None);
        };
        if self.mode == Mode::List {
            print!("{}", self.plan_listing(&plan));
            return Ok(None);
        }

        let executor = Executor::new(ExecutionConfig {
            settings: self.settings,
            scaling: self.scaling,
            show_progress: self.show_progress,
        });
        let scaled = executor
            .execute(&plan, input, expected)
            .with_context(|| format!("suite '{}' failed", suite.name()))?;

        match self.format {
            OutputFormat::Human => {
                let table = format_human_output(&scaled, self.columns, self.raw_scores);
                if self.output.is_some() {
                    self.human.push_str(&table);
                } else {
                    print!("{}", table);
                }
            }
            OutputFormat::Json | OutputFormat::Csv => {
                self.report.push_suite(&scaled.results, scaled.scaling);
            }
        }
        Ok(Some(scaled.results))
    }

    /// Write everything held back until the end of the run
    pub fn finish(self) -> anyhow::Result<()> {
        if self.mode != Mode::Run {
            return Ok(());
        }
        let output = self.render()?;
        match self.output {
            Some(ref path) => {
                let mut file = std::fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                file.write_all(output.as_bytes())?;
                eprintln!("Report written to: {}", path.display());
            }
            None => print!("{}", output),
        }
        Ok(())
    }

    /// Listing for one planned suite; the first one carries the plan header
    fn plan_listing<I: ?Sized, O>(&mut self, plan: &TestSuite<I, O>) -> String {
        let mut listing = String::new();
        if !self.listed_any {
            listing.push_str("MiniBench Plan:\n");
            self.listed_any = true;
        }
        listing.push_str(&format_plan(plan));
        listing
    }

    fn render(&self) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Human => self.human.clone(),
            OutputFormat::Json => generate_json_report(&self.report)?,
            OutputFormat::Csv => generate_csv_report(&self.report),
        })
    }
}

/// Layer settings: configuration file, then slash tokens, then long flags
fn resolve_settings(cli: &Cli, config: &MiniConfig) -> anyhow::Result<BenchmarkSettings> {
    let mut settings = config.settings()?.overlay(&cli.args)?;
    if let Some(secs) = cli.calibration_time {
        settings = settings.with_calibration_time(seconds("--calibration-time", secs)?);
    }
    if let Some(secs) = cli.test_time {
        settings = settings.with_test_time(seconds("--test-time", secs)?);
    }
    Ok(settings)
}

fn seconds(flag: &str, secs: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("{}: {} is out of range", flag, secs))
}

fn write_default_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(path, MiniConfig::default_toml())
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(extra: &[&str]) -> Harness {
        let mut args = vec![
            "bench",
            "--quiet",
            "--calibration-time",
            "0.001",
            "--test-time",
            "0.003",
        ];
        args.extend_from_slice(extra);
        Harness::from_cli(Cli::parse_from(args)).unwrap()
    }

    fn suite() -> TestSuite<str, usize> {
        TestSuite::new("Counting")
            .plus(|s: &str| s.len(), "len")
            .plus(|s: &str| s.chars().count(), "chars")
    }

    #[test]
    fn test_flags_override_tokens() {
        let cli = Cli::parse_from([
            "bench",
            "--test-time",
            "4",
            "/test-time:9",
            "/calibration-time:0.5",
        ]);
        let settings = resolve_settings(&cli, &MiniConfig::default()).unwrap();
        assert_eq!(settings.test_time(), Duration::from_secs(4));
        assert_eq!(settings.calibration_time(), Duration::from_millis(500));
    }

    #[test]
    fn test_tokens_override_config() {
        let config: MiniConfig = toml::from_str("[runner]\ncalibration_time = \"1s\"").unwrap();
        let cli = Cli::parse_from(["bench", "/test-time:7"]);
        let settings = resolve_settings(&cli, &config).unwrap();
        assert_eq!(settings.calibration_time(), Duration::from_secs(1));
        assert_eq!(settings.test_time(), Duration::from_secs(7));
    }

    #[test]
    fn test_bad_settings_rejected() {
        let cli = Cli::parse_from(["bench", "/test-time:soon"]);
        assert!(resolve_settings(&cli, &MiniConfig::default()).is_err());
        let cli = Cli::parse_from(["bench", "--calibration-time=-1"]);
        assert!(resolve_settings(&cli, &MiniConfig::default()).is_err());
    }

    #[test]
    fn test_run_suite_collects_report() {
        let mut h = harness(&["--format", "json", "--scale", "iterations"]);
        assert_eq!(h.scaling(), Some(ScalingMode::VaryIterations));
        let results = h.run_suite(&suite(), "hello", &5).unwrap().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "len");
        assert_eq!(h.report().result_count(), 2);
        assert_eq!(h.report().suites[0].scaling.as_deref(), Some("vary-iterations"));
    }

    #[test]
    fn test_run_suite_reports_failures() {
        let mut h = harness(&["--format", "csv"]);
        let err = h.run_suite(&suite(), "hello", &4).unwrap_err();
        assert!(err.to_string().contains("Counting"));
        assert_eq!(h.report().result_count(), 0);
    }

    #[test]
    fn test_filter_skips_suite() {
        let mut h = harness(&["--format", "json", "--filter", "^nothing$"]);
        assert!(h.run_suite(&suite(), "hello", &5).unwrap().is_none());

        let mut h = harness(&["--format", "json", "--filter", "^chars$"]);
        let results = h.run_suite(&suite(), "hello", &5).unwrap().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "chars");
    }

    #[test]
    fn test_dry_run_does_not_execute() {
        let mut h = harness(&["--dry-run", "--format", "json"]);
        assert!(h.run_suite(&suite(), "hello", &999).unwrap().is_none());
        assert_eq!(h.report().result_count(), 0);
        h.finish().unwrap();
    }

    #[test]
    fn test_plan_header_only_before_first_listing() {
        let mut h = harness(&["--dry-run"]);
        let plan = build_plan(&suite(), None).unwrap();

        let first = h.plan_listing(&plan);
        assert!(first.starts_with("MiniBench Plan:\n├── suite: Counting\n"));
        let second = h.plan_listing(&plan);
        assert!(second.starts_with("├── suite: Counting\n"));
        assert!(!second.contains("MiniBench Plan:"));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let parse = |args: &[&str]| Harness::from_cli(Cli::parse_from(args));
        assert!(parse(&["bench", "--filter", "("]).is_err());
        assert!(parse(&["bench", "--scale", "sideways"]).is_err());
        assert!(parse(&["bench", "--columns", "speed"]).is_err());
        assert!(parse(&["bench", "--format", "html"]).is_err());
    }

    #[test]
    fn test_finish_writes_output_file() {
        let path = std::env::temp_dir().join(format!("minibench-{}.csv", std::process::id()));
        let path_arg = path.to_string_lossy().into_owned();
        let mut h = harness(&["--format", "csv", "--output", &path_arg]);
        h.run_suite(&suite(), "hello", &5).unwrap();
        h.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(written.starts_with("suite,name,iterations"));
        assert!(written.contains("Counting,len,"));
        assert!(written.contains("Counting,chars,"));
    }
}
