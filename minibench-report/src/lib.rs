#![warn(missing_docs)]
//! MiniBench Report - Output Formats
//!
//! Turns result suites into:
//! - Human-readable tables (rendered by `ResultSuite::write_table`)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{Report, ReportConfig, ReportMeta, ResultEntry, SCHEMA_VERSION, SuiteReport};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl OutputFormat {
    /// Whether results are collected and written once at the end of the run
    pub fn is_deferred(self) -> bool {
        !matches!(self, OutputFormat::Human)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
