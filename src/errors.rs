// ============================================================================
// Numeric Errors
// Error types for comparison, rounding and decimal-context operations
// ============================================================================

use std::fmt;

/// Errors that can occur during comparison, rounding or decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A tolerance component was negative (or NaN)
    NegativeTolerance,
    /// Input was NaN or infinite where a finite value is required
    NonFinite,
    /// Context precision must allow at least one significant digit
    InvalidPrecision,
    /// Result exceeded the representable range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Attempted square root of a negative value
    NegativeSquareRoot,
    /// Input string is not a valid decimal literal
    InvalidLiteral,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NegativeTolerance => {
                write!(f, "invalid tolerance: components must be non-negative")
            },
            NumericError::NonFinite => {
                write!(f, "non-finite input: value must not be NaN or infinite")
            },
            NumericError::InvalidPrecision => {
                write!(f, "invalid precision: at least one significant digit required")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
            NumericError::InvalidLiteral => {
                write!(f, "invalid literal: could not parse decimal value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::NonFinite.to_string(),
            "non-finite input: value must not be NaN or infinite"
        );
        assert_eq!(
            NumericError::InvalidLiteral.to_string(),
            "invalid literal: could not parse decimal value"
        );
        assert_eq!(
            NumericError::NegativeSquareRoot.to_string(),
            "square root of a negative value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
    }
}
