// ============================================================================
// Integer Rounding
// Round-half-away-from-zero for binary floats
// ============================================================================

use crate::errors::{NumericError, NumericResult};

// 2^63 as f64; i64::MIN is exactly representable, i64::MAX is not.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Round a float to the nearest integer, ties away from zero.
///
/// Adds a half-unit offset carrying the sign of `x` and truncates toward
/// zero, so midpoints round away from zero: `12.5 -> 13` and `-12.5 -> -13`.
/// This deliberately differs from the platform's default round-half-to-even
/// ("banker's rounding"), which would give `12` and `-12` for the same inputs.
///
/// # Errors
/// - `NonFinite` if `x` is NaN or infinite.
/// - `Overflow` if the rounded value does not fit in an `i64`.
///
/// # Example
/// ```
/// use numeric_toolkit::rounding::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(12.5).unwrap(), 13);
/// assert_eq!(round_half_away_from_zero(-12.5).unwrap(), -13);
/// assert_eq!(round_half_away_from_zero(2.4).unwrap(), 2);
/// ```
#[inline]
pub fn round_half_away_from_zero(x: f64) -> NumericResult<i64> {
    if !x.is_finite() {
        tracing::debug!(x, "non-finite input to round_half_away_from_zero");
        return Err(NumericError::NonFinite);
    }
    let shifted = x + 0.5_f64.copysign(x);
    let truncated = shifted.trunc();
    if truncated >= I64_BOUND || truncated < -I64_BOUND {
        tracing::debug!(x, "rounded value out of i64 range");
        return Err(NumericError::Overflow);
    }
    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoints_round_away_from_zero() {
        assert_eq!(round_half_away_from_zero(12.5).unwrap(), 13);
        assert_eq!(round_half_away_from_zero(-12.5).unwrap(), -13);
        assert_eq!(round_half_away_from_zero(0.5).unwrap(), 1);
        assert_eq!(round_half_away_from_zero(-0.5).unwrap(), -1);
    }

    #[test]
    fn test_non_midpoints_round_to_nearest() {
        assert_eq!(round_half_away_from_zero(2.4).unwrap(), 2);
        assert_eq!(round_half_away_from_zero(-2.4).unwrap(), -2);
        assert_eq!(round_half_away_from_zero(2.6).unwrap(), 3);
        assert_eq!(round_half_away_from_zero(-2.6).unwrap(), -3);
    }

    #[test]
    fn test_zero() {
        assert_eq!(round_half_away_from_zero(0.0).unwrap(), 0);
        assert_eq!(round_half_away_from_zero(-0.0).unwrap(), 0);
    }

    #[test]
    fn test_integers_pass_through() {
        assert_eq!(round_half_away_from_zero(42.0).unwrap(), 42);
        assert_eq!(round_half_away_from_zero(-42.0).unwrap(), -42);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            round_half_away_from_zero(f64::NAN),
            Err(NumericError::NonFinite)
        );
        assert_eq!(
            round_half_away_from_zero(f64::INFINITY),
            Err(NumericError::NonFinite)
        );
        assert_eq!(
            round_half_away_from_zero(f64::NEG_INFINITY),
            Err(NumericError::NonFinite)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(round_half_away_from_zero(1e19), Err(NumericError::Overflow));
        assert_eq!(round_half_away_from_zero(-1e19), Err(NumericError::Overflow));
    }

    proptest! {
        #[test]
        fn prop_result_within_half_unit(x in -1e15f64..1e15) {
            let rounded = round_half_away_from_zero(x).unwrap();
            prop_assert!((rounded as f64 - x).abs() <= 0.5);
        }

        #[test]
        fn prop_sign_symmetric(x in 0.0f64..1e15) {
            let pos = round_half_away_from_zero(x).unwrap();
            let neg = round_half_away_from_zero(-x).unwrap();
            prop_assert_eq!(pos, -neg);
        }
    }
}
