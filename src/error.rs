//! # Error Types
//!
//! This module defines the error type shared by both solvers. Configuration
//! problems are reported before any optimization work starts, so a caller
//! either gets a complete [`Solution`](crate::solution::Solution) or one of
//! these errors, never a partial result.
//!
//! ## Examples
//!
//! ```rust
//! use salesman::annealing::{AnnealingOptions, SimulatedAnnealing};
//! use salesman::error::TspError;
//!
//! let mut options = AnnealingOptions::new(50.0, 0.995, 1e-3, 100, 10_000);
//! options.set_alpha(1.5);
//!
//! match SimulatedAnnealing::new(options) {
//!     Err(TspError::InvalidParameter { name, .. }) => assert_eq!(name, "alpha"),
//!     _ => panic!("alpha outside (0, 1) must be rejected"),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// A configuration value is outside of its accepted range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// What is wrong with the supplied value.
        reason: String,
    },

    /// A builder was asked to build without a value that has no default.
    #[error("Missing parameter `{0}`: a value must be supplied")]
    MissingParameter(&'static str),

    /// The requested optimization method does not exist.
    #[error("Unknown method '{0}': expected 'sa' or 'ga'")]
    UnknownMethod(String),

    /// NaN or infinity was found in caller supplied data.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

impl TspError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TspError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_parameter() {
        let err = TspError::invalid("tournament_size", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `tournament_size`: must be at least 1, got 0"
        );
    }

    #[test]
    fn test_unknown_method_message() {
        let err = TspError::UnknownMethod("aco".to_string());
        assert_eq!(err.to_string(), "Unknown method 'aco': expected 'sa' or 'ga'");
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = TspError::MissingParameter("initial_temperature");
        assert!(err.to_string().contains("initial_temperature"));
    }
}
