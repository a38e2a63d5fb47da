//! Error types for the calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salesfloor_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Total monthly sales was negative.
    #[error("Total monthly sales cannot be negative: {amount}")]
    NegativeSales {
        /// The rejected sales figure.
        amount: Decimal,
    },

    /// A per-agent average sales figure was negative.
    #[error("Average sales for '{role}' cannot be negative: {amount}")]
    NegativeAverage {
        /// The role the average was entered for.
        role: String,
        /// The rejected average.
        amount: Decimal,
    },

    /// A staffing or phone-line count was negative.
    #[error("Count for '{field}' cannot be negative: {value}")]
    NegativeCount {
        /// The field holding the negative count.
        field: String,
        /// The rejected count.
        value: i64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_negative_sales_displays_amount() {
        let error = EngineError::NegativeSales {
            amount: Decimal::from_str("-150.25").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Total monthly sales cannot be negative: -150.25"
        );
    }

    #[test]
    fn test_negative_average_displays_role_and_amount() {
        let error = EngineError::NegativeAverage {
            role: "closer".to_string(),
            amount: Decimal::from_str("-5000").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Average sales for 'closer' cannot be negative: -5000"
        );
    }

    #[test]
    fn test_negative_count_displays_field_and_value() {
        let error = EngineError::NegativeCount {
            field: "overseas".to_string(),
            value: -2,
        };
        assert_eq!(error.to_string(), "Count for 'overseas' cannot be negative: -2");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "net revenue rate must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: net revenue rate must be positive"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
