//! Base-2 logarithm used by information-theoretic weighting.
//!
//! Idf values in the DFR family are expressed in bits, so every model in this crate takes
//! logarithms through here rather than calling `ln` directly.

use crate::{Error, Result};

/// `ln(2)`, the divisor that turns natural logs into bits.
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Base-2 logarithm: `ln(x) / ln(2)`.
///
/// Returns [`Error::InvalidInput`] for `x <= 0` and for non-finite `x`, so a zero term
/// frequency or a zero document frequency never turns into `-inf`/`NaN` inside a score sum.
pub fn log2(x: f64) -> Result<f64> {
    if !x.is_finite() {
        return Err(Error::InvalidInput("log argument is not finite"));
    }
    if x <= 0.0 {
        return Err(Error::InvalidInput("log argument must be positive"));
    }
    Ok(log2_unchecked(x))
}

/// Base-2 logarithm without domain checks.
///
/// For callers that validated `x > 0` already; `x <= 0` yields `-inf` or `NaN`.
#[inline]
pub fn log2_unchecked(x: f64) -> f64 {
    x.ln() / LN_2
}
