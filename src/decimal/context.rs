// ============================================================================
// Decimal Context
// Precision/rounding configuration applied to arithmetic results
// ============================================================================

use crate::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tie-break policy for rounding at a digit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Midpoints round away from zero: `1.25 -> 1.3` at one fractional digit
    HalfUp,
    /// Midpoints round to the nearest even digit ("banker's rounding"):
    /// `1.25 -> 1.2` at one fractional digit
    HalfEven,
}

impl RoundingMode {
    #[inline]
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Immutable precision/rounding configuration for decimal arithmetic.
///
/// `precision` bounds the number of **significant digits** in arithmetic
/// *results*; it never affects construction, so a value built from
/// `"1.23456789"` keeps all its digits until it flows through an operation.
/// For "always N fractional digits" requirements use [`DecimalContext::quantize`]
/// instead, which counts fractional digits and ignores `precision` entirely.
///
/// The context is plain `Copy` data passed explicitly to each operation.
/// Nested or concurrent callers each hold their own value, so no caller can
/// observe another's settings.
///
/// # Example
/// ```
/// use numeric_toolkit::decimal::{from_exact_str, DecimalContext, RoundingMode};
///
/// let ctx = DecimalContext::new(14, RoundingMode::HalfUp).unwrap();
/// let a = from_exact_str("1.23456789").unwrap();
/// let b = from_exact_str("9.87654321").unwrap();
/// let diff = ctx.checked_sub(b, a).unwrap();
/// assert_eq!(ctx.quantize(diff, 2).to_string(), "8.64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalContext {
    precision: u32,
    rounding: RoundingMode,
}

impl DecimalContext {
    /// Default significant-digit precision, matching the widest the underlying
    /// representation carries reliably.
    pub const DEFAULT_PRECISION: u32 = 28;

    /// Create a context.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is zero.
    pub fn new(precision: u32, rounding: RoundingMode) -> NumericResult<Self> {
        if precision == 0 {
            tracing::debug!("rejected zero-precision context");
            return Err(NumericError::InvalidPrecision);
        }
        Ok(Self { precision, rounding })
    }

    /// The significant-digit bound for arithmetic results.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// The tie-break policy.
    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition, result rounded to the context precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum is out of range.
    pub fn checked_add(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        let sum = a.checked_add(b).ok_or(NumericError::Overflow)?;
        self.apply(sum)
    }

    /// Checked subtraction, result rounded to the context precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference is out of range.
    pub fn checked_sub(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        let diff = a.checked_sub(b).ok_or(NumericError::Overflow)?;
        self.apply(diff)
    }

    /// Checked multiplication, result rounded to the context precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the product is out of range.
    pub fn checked_mul(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        let product = a.checked_mul(b).ok_or(NumericError::Overflow)?;
        self.apply(product)
    }

    /// Checked division, result rounded to the context precision.
    ///
    /// # Errors
    /// - `DivisionByZero` if `b` is zero.
    /// - `Overflow` if the quotient is out of range.
    pub fn checked_div(&self, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
        if b.is_zero() {
            tracing::debug!(%a, "decimal division by zero");
            return Err(NumericError::DivisionByZero);
        }
        let quotient = a.checked_div(b).ok_or(NumericError::Overflow)?;
        self.apply(quotient)
    }

    /// Checked square root, result rounded to the context precision.
    ///
    /// Staying on the decimal side of the computation preserves the digits
    /// the operand carries; routing a decimal through an f64 square root
    /// would reintroduce exactly the binary representation error this type
    /// exists to avoid.
    ///
    /// # Errors
    /// - `NegativeSquareRoot` if `value` is negative.
    /// - `Overflow` if the root cannot be computed in range.
    pub fn checked_sqrt(&self, value: Decimal) -> NumericResult<Decimal> {
        if value.is_sign_negative() && !value.is_zero() {
            tracing::debug!(%value, "square root of a negative value");
            return Err(NumericError::NegativeSquareRoot);
        }
        let root = value.sqrt().ok_or(NumericError::Overflow)?;
        self.apply(root)
    }

    /// Round a value to a fixed number of fractional digits.
    ///
    /// Applies the context's rounding mode but **not** its precision: a
    /// context with `precision = 2` still quantizes to four fractional digits
    /// when asked. The result carries exactly `fractional_digits` digits after
    /// the point where representable.
    pub fn quantize(&self, value: Decimal, fractional_digits: u32) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(fractional_digits, self.rounding.strategy());
        rounded.rescale(fractional_digits);
        rounded
    }

    // ========================================================================
    // Significant-digit rounding
    // ========================================================================

    /// Round `value` to `self.precision` significant digits.
    ///
    /// Uses the adjusted exponent (position of the most significant digit) to
    /// translate a significant-digit bound into a fractional-digit rounding
    /// point, which may fall left of the decimal point.
    fn apply(&self, value: Decimal) -> NumericResult<Decimal> {
        if value.is_zero() {
            return Ok(value);
        }

        let digits = mantissa_digits(value.mantissa().unsigned_abs());
        let adjusted = digits as i32 - 1 - value.scale() as i32;
        let dp = self.precision as i32 - 1 - adjusted;

        if dp >= value.scale() as i32 {
            // Already within precision
            return Ok(value);
        }

        if dp >= 0 {
            return Ok(value.round_dp_with_strategy(dp as u32, self.rounding.strategy()));
        }

        // Rounding point is left of the decimal point: shift down, round at
        // the unit position, shift back.
        let shift = (-dp) as u32;
        let factor = Decimal::from_i128_with_scale(10_i128.pow(shift), 0);
        let shifted = value.checked_div(factor).ok_or(NumericError::Overflow)?;
        shifted
            .round_dp_with_strategy(0, self.rounding.strategy())
            .checked_mul(factor)
            .ok_or(NumericError::Overflow)
    }
}

impl Default for DecimalContext {
    /// 28 significant digits, ties to even: the conventional default context.
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            rounding: RoundingMode::HalfEven,
        }
    }
}

/// Number of decimal digits in a mantissa.
fn mantissa_digits(mut mantissa: u128) -> u32 {
    let mut digits = 1;
    while mantissa >= 10 {
        mantissa /= 10;
        digits += 1;
    }
    digits
}
