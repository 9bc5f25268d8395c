//! Result table columns

use crate::error::BenchError;
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Columns to show when rendering a result suite.
    ///
    /// Presentation order is always Name, Iterations, Duration, Score,
    /// however the set was composed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResultColumns: u32 {
        /// Test name
        const NAME = 1;
        /// Iteration count
        const ITERATIONS = 2;
        /// Duration as `M:SS.mmm`
        const DURATION = 4;
        /// Score, optionally scaled to a standard
        const SCORE = 8;

        /// Name and iteration count
        const NAME_AND_ITERATIONS = Self::NAME.bits() | Self::ITERATIONS.bits();
        /// Name and duration
        const NAME_AND_DURATION = Self::NAME.bits() | Self::DURATION.bits();
        /// Name and score
        const NAME_AND_SCORE = Self::NAME.bits() | Self::SCORE.bits();
        /// Every column
        const ALL = Self::NAME.bits()
            | Self::ITERATIONS.bits()
            | Self::DURATION.bits()
            | Self::SCORE.bits();
    }
}

/// Individual columns in presentation order
pub(crate) const INDIVIDUAL_COLUMNS: [ResultColumns; 4] = [
    ResultColumns::NAME,
    ResultColumns::ITERATIONS,
    ResultColumns::DURATION,
    ResultColumns::SCORE,
];

impl FromStr for ResultColumns {
    type Err = BenchError;

    /// Parse a comma or pipe separated list such as `name,duration,score` or `NameAndScore|Iterations`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut columns = ResultColumns::empty();
        for part in s.split([',', '|']).map(str::trim).filter(|p| !p.is_empty()) {
            let normalized = part.to_lowercase().replace(['-', '_'], "");
            columns |= match normalized.as_str() {
                "name" => ResultColumns::NAME,
                "iterations" => ResultColumns::ITERATIONS,
                "duration" => ResultColumns::DURATION,
                "score" => ResultColumns::SCORE,
                "nameanditerations" => ResultColumns::NAME_AND_ITERATIONS,
                "nameandduration" => ResultColumns::NAME_AND_DURATION,
                "nameandscore" => ResultColumns::NAME_AND_SCORE,
                "all" => ResultColumns::ALL,
                _ => {
                    return Err(BenchError::invalid_argument(
                        "columns",
                        format!("unknown column '{}'", part),
                    ));
                }
            };
        }
        if columns.is_empty() {
            return Err(BenchError::invalid_argument("columns", "no columns selected"));
        }
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_columns_are_distinct_powers_of_two() {
        let mut seen = 0u32;
        for column in INDIVIDUAL_COLUMNS {
            let bits = column.bits();
            assert!(bits.is_power_of_two());
            assert_eq!(seen & bits, 0, "same value defined twice: {}", bits);
            seen |= bits;
        }
    }

    #[test]
    fn test_combinations() {
        assert_eq!(
            ResultColumns::NAME_AND_DURATION,
            ResultColumns::NAME | ResultColumns::DURATION
        );
        assert_eq!(
            ResultColumns::NAME_AND_ITERATIONS,
            ResultColumns::NAME | ResultColumns::ITERATIONS
        );
        assert_eq!(
            ResultColumns::NAME_AND_SCORE,
            ResultColumns::NAME | ResultColumns::SCORE
        );
        let known = INDIVIDUAL_COLUMNS
            .iter()
            .fold(ResultColumns::empty(), |acc, c| acc | *c);
        assert_eq!(ResultColumns::ALL & known, known);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "name,duration,score".parse::<ResultColumns>().unwrap(),
            ResultColumns::NAME_AND_DURATION | ResultColumns::SCORE
        );
        assert_eq!(
            "NameAndScore | Iterations".parse::<ResultColumns>().unwrap(),
            ResultColumns::NAME_AND_SCORE | ResultColumns::ITERATIONS
        );
        assert_eq!("all".parse::<ResultColumns>().unwrap(), ResultColumns::ALL);
        assert!("name,colour".parse::<ResultColumns>().is_err());
        assert!("".parse::<ResultColumns>().is_err());
    }
}
