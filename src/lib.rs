// ============================================================================
// Numeric Toolkit Library
// Tolerance-based float comparison and decimal rounding utilities
// ============================================================================

//! # Numeric Toolkit
//!
//! A small, pure library for the numeric comparisons that naive `==` gets
//! wrong.
//!
//! ## Features
//!
//! - **Tolerance-based equality** combining relative and absolute tolerances,
//!   symmetric in its operands
//! - **Half-away-from-zero integer rounding** for floats, in contrast to the
//!   platform's default round-half-to-even
//! - **Decimal arithmetic contexts** with explicit significant-digit precision
//!   and rounding mode, plus `quantize` for fixed fractional digits
//! - **Two decimal construction paths**: exact from strings, documented-lossy
//!   from binary floats
//!
//! All operations are pure and synchronous; failures surface as
//! [`NumericError`](errors::NumericError) values, never panics.
//!
//! ## Example
//!
//! ```rust
//! use numeric_toolkit::prelude::*;
//!
//! // Binary floats accumulate representation error...
//! let sum = 0.1 + 0.1 + 0.1;
//! assert!(!is_close(sum, 0.3, Tolerance::EXACT).unwrap());
//! assert!(is_close(sum, 0.3, Tolerance::absolute(1e-9).unwrap()).unwrap());
//!
//! // ...decimals built from strings do not.
//! let ctx = DecimalContext::new(14, RoundingMode::HalfUp).unwrap();
//! let a = from_exact_str("0.1").unwrap();
//! let sum = ctx.checked_add(ctx.checked_add(a, a).unwrap(), a).unwrap();
//! assert_eq!(sum, from_exact_str("0.3").unwrap());
//! ```

pub mod compare;
pub mod decimal;
pub mod errors;
pub mod rounding;

// Re-exports for convenience
pub mod prelude {
    pub use crate::compare::{is_close, is_close_default, Tolerance};
    pub use crate::decimal::{from_exact_str, from_f64_lossy, DecimalContext, RoundingMode};
    pub use crate::errors::{NumericError, NumericResult};
    pub use crate::rounding::round_half_away_from_zero;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_float_drift_detected_then_absorbed() {
        let sum = 0.1 + 0.1 + 0.1;

        // Exact comparison sees the binary representation gap
        assert!(!is_close(sum, 0.3, Tolerance::EXACT).unwrap());

        // An absolute tolerance absorbs it
        assert!(is_close(sum, 0.3, Tolerance::absolute(1e-9).unwrap()).unwrap());

        // The decimal path never drifts in the first place
        let ctx = DecimalContext::default();
        let tenth = from_exact_str("0.1").unwrap();
        let sum = ctx
            .checked_add(ctx.checked_add(tenth, tenth).unwrap(), tenth)
            .unwrap();
        assert_eq!(sum, from_exact_str("0.3").unwrap());
    }

    #[test]
    fn test_rounding_contrast_with_platform_default() {
        // f64::round_ties_even is the platform default the library contrasts
        assert_eq!((12.5_f64).round_ties_even(), 12.0);
        assert_eq!(round_half_away_from_zero(12.5).unwrap(), 13);

        assert_eq!((-12.5_f64).round_ties_even(), -12.0);
        assert_eq!(round_half_away_from_zero(-12.5).unwrap(), -13);
    }

    #[test]
    fn test_construction_paths_feed_the_same_context() {
        let ctx = DecimalContext::new(14, RoundingMode::HalfUp).unwrap();

        let exact = from_exact_str("1.35").unwrap();
        let lossy = from_f64_lossy(1.35).unwrap();

        // Same quantized result here, but for different reasons: the exact
        // value is a true midpoint, the lossy one sits just above it.
        assert_eq!(ctx.quantize(exact, 1).to_string(), "1.4");
        assert_eq!(ctx.quantize(lossy, 1).to_string(), "1.4");
        assert!(lossy > exact);
    }

    #[test]
    fn test_errors_carry_distinct_variants() {
        let ctx = DecimalContext::default();

        assert_eq!(
            Tolerance::new(-1.0, 0.0).unwrap_err(),
            NumericError::NegativeTolerance
        );
        assert_eq!(
            is_close(f64::NAN, 0.0, Tolerance::default()).unwrap_err(),
            NumericError::NonFinite
        );
        assert_eq!(
            from_exact_str("12,5").unwrap_err(),
            NumericError::InvalidLiteral
        );
        assert_eq!(
            ctx.checked_div(from_exact_str("1").unwrap(), rust_decimal::Decimal::ZERO)
                .unwrap_err(),
            NumericError::DivisionByZero
        );
    }
}
