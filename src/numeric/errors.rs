// ============================================================================
// Numeric Errors
// Error types for sezimal arithmetic and conversions
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing, converting or computing sezimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Numeral text does not follow the sezimal (or target radix) grammar
    #[error("invalid numeral {input:?}: {reason}")]
    Validation {
        /// The offending input, as received
        input: String,
        /// Short description of what is wrong with it
        reason: &'static str,
    },

    /// Non-zero fractional digits where an integer was required
    #[error("{0:?} is not a valid sezimal integer")]
    InvalidInteger(String),

    /// Division, reciprocal or modulo by an exact zero
    #[error("division by zero")]
    DivisionByZero,

    /// Operation undefined for the given operands
    #[error("domain error: {0}")]
    Domain(String),

    /// Value does not fit a 28-digit `rust_decimal::Decimal`
    #[error("value is outside the range of rust_decimal")]
    DecimalRange,

    /// Value does not fit the requested native integer type
    #[error("arithmetic overflow: value does not fit the target type")]
    Overflow,

    /// Precision context is invalid or was installed twice
    #[error("invalid precision context: {0}")]
    InvalidContext(String),
}

impl NumericError {
    pub(crate) fn validation(input: &str, reason: &'static str) -> Self {
        NumericError::Validation {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        NumericError::Domain(reason.into())
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::validation("12.3.4", "multiple decimal points").to_string(),
            "invalid numeral \"12.3.4\": multiple decimal points"
        );
        assert_eq!(
            NumericError::InvalidInteger("1.2".to_string()).to_string(),
            "\"1.2\" is not a valid sezimal integer"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::DivisionByZero, NumericError::DivisionByZero);
        assert_ne!(NumericError::DivisionByZero, NumericError::Overflow);
        assert_eq!(
            NumericError::domain("zero to a negative power"),
            NumericError::Domain("zero to a negative power".to_string())
        );
    }
}
