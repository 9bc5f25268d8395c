//! CSV Output

use crate::report::Report;
use std::fmt::Write;

const HEADER: &str = "suite,name,iterations,duration_ns,score,relative_score";

/// Generate a CSV report with one row per result.
pub fn generate_csv_report(report: &Report) -> String {
    let mut out = String::with_capacity(64 * (report.result_count() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for suite in &report.suites {
        for r in &suite.results {
            let _ = writeln!(
                out,
                "{},{},{},{},{:.4},{:.4}",
                escape(&suite.name),
                escape(&r.name),
                r.iterations,
                r.duration_ns,
                r.score,
                r.relative_score
            );
        }
    }
    out
}

/// Quote a field if it contains a delimiter, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
