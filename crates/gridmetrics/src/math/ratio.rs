//! Ratio-threshold comparison.
//!
//! ## Purpose
//!
//! This module decides whether the ratio of the smaller of two values to the
//! larger strictly exceeds two-thirds. Both the ratio and the threshold are
//! rounded to two decimal places before comparison, so the effective cutoff
//! is `0.67`.
//!
//! ## Design notes
//!
//! * **Rounding**: Two-decimal rounding uses round-half-away-from-zero
//!   (`Float::round`) on both sides of the comparison.
//! * **Symmetry**: Swapping the two inputs never changes the result; the
//!   smaller value is always divided by the larger.
//!
//! ## Invariants
//!
//! * Equal nonzero inputs yield ratio `1.0` and pass the check.
//! * The comparison is strict: a rounded ratio of exactly `0.67` fails.
//!
//! ## Non-goals
//!
//! * This module does not validate the divisor (see the engine layer).

// External dependencies
use num_traits::Float;

// ============================================================================
// Threshold Constant
// ============================================================================

/// Ratio cutoff before rounding: 2/3.
const TWO_THIRDS: f64 = 2.0 / 3.0;

// ============================================================================
// Ratio Kernels
// ============================================================================

/// Round a value to two decimal places, halves away from zero.
#[inline]
pub fn round_to_hundredths<T: Float>(v: T) -> T {
    let scale = T::from(100.0).unwrap_or_else(T::one);
    (v * scale).round() / scale
}

/// Compute the smaller-to-larger ratio of two values, rounded to two
/// decimal places.
///
/// The larger input is the divisor, so equal inputs yield exactly `1.0`.
/// The larger input must be nonzero.
#[inline]
pub fn rounded_ratio<T: Float>(x: T, y: T) -> T {
    let divisor = if x > y { x } else { y };
    let dividend = if x <= y { x } else { y };
    round_to_hundredths(dividend / divisor)
}

/// Return `true` if the rounded smaller-to-larger ratio of `x` and `y`
/// strictly exceeds the rounded two-thirds threshold.
///
/// The larger input must be nonzero.
#[inline]
pub fn ratio_exceeds_threshold<T: Float>(x: T, y: T) -> bool {
    let threshold = round_to_hundredths(T::from(TWO_THIRDS).unwrap_or_else(T::one));
    rounded_ratio(x, y) > threshold
}
