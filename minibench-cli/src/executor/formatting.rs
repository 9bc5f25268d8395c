//! Output Formatting
//!
//! Human-readable output for suites: the result table of a finished
//! suite and the plan listing shown by `--dry-run`.

use super::execution::ScaledSuite;
use minibench_core::{ResultColumns, TestSuite};

/// Format a finished suite as an aligned table.
///
/// Scores are shown relative to the suite's best result unless
/// `raw_scores` is set.
pub fn format_human_output(
    suite: &ScaledSuite,
    columns: ResultColumns,
    raw_scores: bool,
) -> String {
    let standard = (!raw_scores).then(|| suite.best());
    suite.results.to_table(columns, standard)
}

/// Format the tests a suite would run, without running them
pub fn format_plan<I: ?Sized, O>(suite: &TestSuite<I, O>) -> String {
    let mut output = format!("├── suite: {}\n", suite.name());
    for test in suite {
        output.push_str(&format!("│   ├── {}\n", test.name()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibench_core::{BenchmarkResult, ResultSuite};
    use std::time::Duration;

    fn scaled() -> ScaledSuite {
        let results = ResultSuite::new(
            "Joins",
            [
                BenchmarkResult::new("concat", Duration::from_millis(3), 100).unwrap(),
                BenchmarkResult::new("builder", Duration::from_millis(1), 100).unwrap(),
            ],
        )
        .unwrap();
        ScaledSuite {
            results,
            scaling: None,
        }
    }

    #[test]
    fn test_relative_scores() {
        let out = format_human_output(&scaled(), ResultColumns::NAME_AND_SCORE, false);
        assert_eq!(
            out,
            "============ Joins ============\nconcat  3.00\nbuilder 1.00\n\n"
        );
    }

    #[test]
    fn test_raw_scores() {
        let out = format_human_output(&scaled(), ResultColumns::NAME_AND_SCORE, true);
        assert!(out.contains("concat  300.00"));
        assert!(out.contains("builder 100.00"));
    }

    #[test]
    fn test_plan_listing() {
        let suite = TestSuite::<u8, u8>::new("Bytes")
            .plus(|b: &u8| b.wrapping_add(1), "inc")
            .plus(|b: &u8| b.wrapping_sub(1), "dec");
        assert_eq!(
            format_plan(&suite),
            "├── suite: Bytes\n│   ├── inc\n│   ├── dec\n"
        );
    }
}
