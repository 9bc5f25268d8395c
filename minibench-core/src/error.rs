//! Error types for the core harness

use thiserror::Error;

/// Errors raised by the result model, the calibrated runner and the suites.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// An argument violated a documented precondition
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        param: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The operation is not valid in the receiver's current state
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A test returned something other than the expected output
    #[error("test '{name}' did not produce the expected output")]
    TestFailure {
        /// Display name of the failing test
        name: String,
    },
}

impl BenchError {
    pub(crate) fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        BenchError::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BenchError::InvalidArgument { .. })
    }
}

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, BenchError>;
