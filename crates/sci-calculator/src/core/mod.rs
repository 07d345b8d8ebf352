//! Core calculator module
//!
//! The engine, its operand representation, the binary and scientific
//! operations it applies and the display formatting of its state.

pub mod engine;
pub mod format;
mod operand;
mod operations;

pub use engine::CalculatorEngine;
pub use format::{DisplayFormatter, DisplayLines};
pub use operand::Operand;
pub use operations::{round_to, AngleMode, Operation, ScientificFunction};

use thiserror::Error;

/// Result type for calculator boundary operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the calculator boundaries.
///
/// Engine operations themselves never fail: unparsable operands turn an
/// operation into a no-op and undefined math yields NaN or infinity.
#[derive(Debug, Error)]
pub enum CalcError {
    /// An input token did not map to any calculator action
    #[error("Unknown input token: {0:?}")]
    UnknownToken(String),

    /// A configured rounding precision exceeds what an f64 can carry
    #[error("Precision {precision} out of range (max {max})")]
    PrecisionOutOfRange {
        /// Requested decimal places
        precision: u32,
        /// Largest supported value
        max: u32,
    },

    /// A configuration document could not be decoded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_unknown_token() {
        let err = CalcError::UnknownToken("sinh".into());
        assert_eq!(format!("{err}"), "Unknown input token: \"sinh\"");
    }

    #[test]
    fn test_calc_error_display_invalid_config() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = CalcError::from(json_err);
        assert!(format!("{err}").starts_with("Invalid configuration:"));
    }

    #[test]
    fn test_calc_error_display_precision() {
        let err = CalcError::PrecisionOutOfRange {
            precision: 400,
            max: 15,
        };
        assert_eq!(format!("{err}"), "Precision 400 out of range (max 15)");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::UnknownToken("x".into()));
        assert!(err.to_string().contains("Unknown"));
    }
}
