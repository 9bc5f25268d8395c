//! Result Suites
//!
//! A [`ResultSuite`] is the named, ordered output of running a
//! [`TestSuite`](crate::TestSuite). It can be rescaled against a standard
//! and rendered as an aligned text table:
//!
//! ```text
//! ============ SuiteName ============
//! Result1Name 100 0:00.001 100.00
//! Result2Name 200 0:00.000  25.00
//!
//! ```

use crate::columns::{INDIVIDUAL_COLUMNS, ResultColumns};
use crate::error::{BenchError, Result};
use crate::result::{BenchmarkResult, ScalingMode, find_best};
use std::io::{self, Write};
use std::ops::Index;
use std::time::Duration;

/// A named, non-empty, ordered collection of benchmark results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSuite {
    name: String,
    results: Vec<BenchmarkResult>,
}

impl ResultSuite {
    /// Create a suite; fails if `results` is empty
    pub fn new(
        name: impl Into<String>,
        results: impl IntoIterator<Item = BenchmarkResult>,
    ) -> Result<Self> {
        let results: Vec<_> = results.into_iter().collect();
        if results.is_empty() {
            return Err(BenchError::invalid_argument(
                "results",
                "empty sequence of results provided",
            ));
        }
        Ok(Self {
            name: name.into(),
            results,
        })
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of results (always at least one)
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always false; a result suite is never empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result at `index`, if any
    pub fn get(&self, index: usize) -> Option<&BenchmarkResult> {
        self.results.get(index)
    }

    /// Iterate over results in their original order
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkResult> {
        self.results.iter()
    }

    /// The result with the lowest score
    pub fn find_best(&self) -> &BenchmarkResult {
        // Non-empty and free of absent entries, so the lookup cannot fail
        find_best(&self.results).unwrap_or(&self.results[0])
    }

    /// New suite with every result scaled to `standard`
    pub fn scale(&self, standard: &BenchmarkResult, mode: ScalingMode) -> Result<ResultSuite> {
        let results = self
            .results
            .iter()
            .map(|r| r.scale_to_standard(standard, mode).map(|s| s.into_owned()))
            .collect::<Result<Vec<_>>>()?;
        ResultSuite::new(self.name.clone(), results)
    }

    /// New suite scaled to this suite's best result
    pub fn scale_by_best(&self, mode: ScalingMode) -> Result<ResultSuite> {
        self.scale(self.find_best(), mode)
    }

    /// Write the results as an aligned table.
    ///
    /// `standard_for_score` is the result counted as a score of 1.0; without
    /// one the raw scores (ticks per iteration) are shown.
    pub fn write_table<W: Write>(
        &self,
        out: &mut W,
        columns: ResultColumns,
        standard_for_score: Option<&BenchmarkResult>,
    ) -> io::Result<()> {
        writeln!(out, "============ {} ============", self.name)?;

        let formatted: Vec<Vec<String>> = INDIVIDUAL_COLUMNS
            .iter()
            .filter(|c| columns.contains(**c))
            .map(|c| {
                self.results
                    .iter()
                    .map(|r| format_cell(*c, r, standard_for_score))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = formatted
            .iter()
            .map(|col| col.iter().map(|cell| cell.chars().count()).max().unwrap_or(0))
            .collect();

        for row in 0..self.results.len() {
            for (col, (cells, width)) in formatted.iter().zip(&widths).enumerate() {
                if col == 0 {
                    write!(out, "{:<width$}", cells[row], width = width)?;
                } else {
                    write!(out, " {:>width$}", cells[row], width = width)?;
                }
            }
            writeln!(out)?;
        }
        writeln!(out)
    }

    /// Render the table into a string
    pub fn to_table(
        &self,
        columns: ResultColumns,
        standard_for_score: Option<&BenchmarkResult>,
    ) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_table(&mut buf, columns, standard_for_score);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Print the table to standard output
    pub fn display(
        &self,
        columns: ResultColumns,
        standard_for_score: Option<&BenchmarkResult>,
    ) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_table(&mut lock, columns, standard_for_score)
    }
}

impl Index<usize> for ResultSuite {
    type Output = BenchmarkResult;

    fn index(&self, index: usize) -> &BenchmarkResult {
        &self.results[index]
    }
}

impl<'a> IntoIterator for &'a ResultSuite {
    type Item = &'a BenchmarkResult;
    type IntoIter = std::slice::Iter<'a, BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Format a single column value for one result
fn format_cell(
    column: ResultColumns,
    result: &BenchmarkResult,
    standard: Option<&BenchmarkResult>,
) -> String {
    if column == ResultColumns::NAME {
        result.name().to_string()
    } else if column == ResultColumns::ITERATIONS {
        result.iterations().to_string()
    } else if column == ResultColumns::DURATION {
        format_duration(result.duration())
    } else {
        format!("{:.2}", result.scaled_score(standard))
    }
}

/// Format a duration as `M:SS.mmm` (total whole minutes)
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{}:{:02}.{:03}",
        total_secs / 60,
        total_secs % 60,
        duration.subsec_millis()
    )
}

/// Find the best result across several suites
pub fn find_best_in_suites<'a>(
    suites: impl IntoIterator<Item = &'a ResultSuite>,
) -> Result<&'a BenchmarkResult> {
    find_best(suites.into_iter().flat_map(|s| s.iter()))
}
