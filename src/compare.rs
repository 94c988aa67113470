// ============================================================================
// Tolerance-Based Comparison
// Combined relative/absolute tolerance equality for binary floats
// ============================================================================

use crate::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable relative/absolute tolerance pair used to decide float equality.
///
/// Both components are validated at construction and never change afterwards,
/// so a `Tolerance` in hand is always usable.
///
/// # Choosing tolerances
/// - Pure relative tolerance (`abs_tol = 0`) degrades near zero: the threshold
///   shrinks with the operands, so `1e-10` is never "close" to `0.0`.
/// - Pure absolute tolerance ignores magnitude: a gap acceptable at `30_000.0`
///   is treated the same as at `0.03`.
/// - Combining both takes whichever threshold is further from zero, which is
///   the behavior most callers want. Monetary comparisons typically use only
///   `abs_tol` (e.g. `1e-3` to compare at cent granularity).
///
/// # Example
/// ```
/// use numeric_toolkit::compare::{is_close, Tolerance};
///
/// let tol = Tolerance::new(1e-3, 1e-3).unwrap();
/// assert!(is_close(10000.01 + 10000.01 + 10000.01, 30000.03, tol).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    rel_tol: f64,
    abs_tol: f64,
}

impl Tolerance {
    /// Relative tolerance used by [`Tolerance::default`]
    pub const DEFAULT_REL_TOL: f64 = 1e-9;

    /// Exact equality: both components zero
    pub const EXACT: Self = Self {
        rel_tol: 0.0,
        abs_tol: 0.0,
    };

    /// Create a tolerance pair.
    ///
    /// # Errors
    /// - `NonFinite` if either component is NaN or infinite. An infinite
    ///   tolerance would declare everything close, which is never intended.
    /// - `NegativeTolerance` if either component is negative.
    pub fn new(rel_tol: f64, abs_tol: f64) -> NumericResult<Self> {
        if !rel_tol.is_finite() || !abs_tol.is_finite() {
            tracing::debug!(rel_tol, abs_tol, "rejected non-finite tolerance pair");
            return Err(NumericError::NonFinite);
        }
        if rel_tol < 0.0 || abs_tol < 0.0 {
            tracing::debug!(rel_tol, abs_tol, "rejected negative tolerance pair");
            return Err(NumericError::NegativeTolerance);
        }
        Ok(Self { rel_tol, abs_tol })
    }

    /// Purely relative tolerance (`abs_tol = 0`).
    pub fn relative(rel_tol: f64) -> NumericResult<Self> {
        Self::new(rel_tol, 0.0)
    }

    /// Purely absolute tolerance (`rel_tol = 0`).
    pub fn absolute(abs_tol: f64) -> NumericResult<Self> {
        Self::new(0.0, abs_tol)
    }

    /// The relative component.
    #[inline]
    pub const fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// The absolute component.
    #[inline]
    pub const fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// The comparison threshold for a given pair of operands.
    #[inline]
    fn threshold(&self, a: f64, b: f64) -> f64 {
        (self.rel_tol * a.abs().max(b.abs())).max(self.abs_tol)
    }
}

impl Default for Tolerance {
    /// `rel_tol = 1e-9`, `abs_tol = 0.0`, matching the common library default.
    #[inline]
    fn default() -> Self {
        Self {
            rel_tol: Self::DEFAULT_REL_TOL,
            abs_tol: 0.0,
        }
    }
}

/// Decide whether two floats are equal within a tolerance.
///
/// Computes `delta = |a - b|` and compares it against
/// `max(rel_tol * max(|a|, |b|), abs_tol)`. The comparison is **non-strict**
/// (`delta <= threshold`): the boundary case counts as close, which keeps
/// `is_close(a, a, Tolerance::EXACT)` true and matches the widely used
/// `isclose` definition. Taking the max over both operand magnitudes makes the
/// result symmetric in `a` and `b`.
///
/// No intermediate rounding is applied; the only error involved is native f64
/// arithmetic on `delta` and the threshold.
///
/// # Errors
/// Returns `NonFinite` if either operand is NaN or infinite.
///
/// # Example
/// ```
/// use numeric_toolkit::compare::{is_close, Tolerance};
///
/// // 0.1 + 0.1 + 0.1 is not bit-exactly 0.3 in binary floating point
/// let sum = 0.1 + 0.1 + 0.1;
/// assert!(!is_close(sum, 0.3, Tolerance::EXACT).unwrap());
/// assert!(is_close(sum, 0.3, Tolerance::absolute(1e-9).unwrap()).unwrap());
/// ```
#[inline]
pub fn is_close(a: f64, b: f64, tol: Tolerance) -> NumericResult<bool> {
    if !a.is_finite() || !b.is_finite() {
        tracing::debug!(a, b, "non-finite operand in is_close");
        return Err(NumericError::NonFinite);
    }
    let delta = (a - b).abs();
    Ok(delta <= tol.threshold(a, b))
}

/// [`is_close`] with the default tolerance (`rel_tol = 1e-9`, `abs_tol = 0`).
#[inline]
pub fn is_close_default(a: f64, b: f64) -> NumericResult<bool> {
    is_close(a, b, Tolerance::default())
}
