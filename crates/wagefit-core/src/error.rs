//! Error types for salary regression
//!
//! Defines the standardized error type for loading, statistics, and fitting.

use thiserror::Error;

/// Result type alias for wagefit operations
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors that can occur while loading data or fitting the model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// No valid observation rows remained after parsing
    #[error("No observation rows found in input")]
    NoData,

    /// The independent variable has zero variance, so the line is undefined
    #[error("All experience values are identical; regression line is undefined")]
    DegenerateInput,

    /// Underlying I/O failure while reading the source
    #[error("Failed to read input: {0}")]
    Io(String),

    /// Malformed delimited input
    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    /// A field was present but could not be parsed as a number
    #[error("Invalid numeric value '{value}' on line {line}")]
    InvalidNumber { line: usize, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_display() {
        let error = RegressionError::NoData;
        assert_eq!(format!("{}", error), "No observation rows found in input");
    }

    #[test]
    fn test_degenerate_input_display() {
        let error = RegressionError::DegenerateInput;
        let display = format!("{}", error);
        assert!(display.contains("identical"));
        assert!(display.contains("undefined"));
    }

    #[test]
    fn test_invalid_number_display() {
        let error = RegressionError::InvalidNumber {
            line: 7,
            value: "abc".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid numeric value 'abc' on line 7"
        );
    }

    #[test]
    fn test_error_is_clone_and_partial_eq() {
        let error = RegressionError::InvalidNumber {
            line: 2,
            value: "x".to_string(),
        };
        let cloned = error.clone();
        assert_eq!(error, cloned);
        assert_ne!(error, RegressionError::NoData);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &RegressionError::NoData;
        let _ = error.to_string();
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<f64> {
            Err(RegressionError::DegenerateInput)
        }

        fn outer() -> Result<f64> {
            inner()?;
            Ok(1.0)
        }

        assert_eq!(outer().unwrap_err(), RegressionError::DegenerateInput);
    }
}
