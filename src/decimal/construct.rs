// ============================================================================
// Decimal Construction
// Exact-string and lossy binary-float construction paths
// ============================================================================

use crate::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Construct a decimal from a decimal-formatted string, exactly.
///
/// The string is the authoritative representation: `"1.35"` yields exactly
/// `1.35`. This is the construction path to use whenever the intended value is
/// known in decimal digits.
///
/// # Errors
/// Returns `InvalidLiteral` if the string is not a valid decimal literal or
/// carries more precision than can be represented.
///
/// # Example
/// ```
/// use numeric_toolkit::decimal::from_exact_str;
///
/// let x = from_exact_str("1.35").unwrap();
/// assert_eq!(x.to_string(), "1.35");
/// assert!(from_exact_str("not_a_number").is_err());
/// ```
pub fn from_exact_str(s: &str) -> NumericResult<Decimal> {
    Decimal::from_str_exact(s.trim()).map_err(|err| {
        tracing::debug!(literal = s, %err, "failed to parse decimal literal");
        NumericError::InvalidLiteral
    })
}

/// Construct a decimal from a binary float, capturing its expansion.
///
/// This path is **lossy in intent**: a float literal like `1.35_f64` does not
/// store `1.35` but the nearest binary fraction, and this function captures
/// that value's decimal expansion (`1.3500000000000000888...`), not the
/// literal the user wrote. Use [`from_exact_str`] when the decimal digits are
/// what you mean; use this function only when the float itself is the value.
///
/// # Errors
/// - `NonFinite` if `x` is NaN or infinite.
/// - `Overflow` if the magnitude exceeds the representable decimal range.
///
/// # Example
/// ```
/// use numeric_toolkit::decimal::{from_exact_str, from_f64_lossy};
///
/// // 1.25 has an exact binary representation, 1.35 does not.
/// assert_eq!(from_f64_lossy(1.25).unwrap(), from_exact_str("1.25").unwrap());
/// assert_ne!(from_f64_lossy(1.35).unwrap(), from_exact_str("1.35").unwrap());
/// ```
pub fn from_f64_lossy(x: f64) -> NumericResult<Decimal> {
    if !x.is_finite() {
        tracing::debug!(x, "non-finite input to from_f64_lossy");
        return Err(NumericError::NonFinite);
    }
    Decimal::from_f64_retain(x).ok_or_else(|| {
        tracing::debug!(x, "float out of decimal range");
        NumericError::Overflow
    })
}
