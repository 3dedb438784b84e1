//! High-level API for gridmetrics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. Each function
//! validates its input through the engine layer, delegates to the matching
//! math kernel, and converts integer-valued results to `u64`.
//!
//! ## Design notes
//!
//! * **Validated**: All caller input is checked before any kernel runs.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Total**: Every precondition violation surfaces as a typed error;
//!   nothing panics.
//!
//! ## Key concepts
//!
//! * **Integer results**: Truncated roots and distances are returned as
//!   `u64`; roots beyond `u64` range surface as an error.
//! * **Ratio check**: Strict comparison of the rounded smaller-to-larger
//!   ratio against the rounded two-thirds cutoff.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::distance::grid_distance;
use crate::math::isqrt::floor_sqrt;
use crate::math::ratio::ratio_exceeds_threshold;

// Publicly re-exported types
pub use crate::primitives::errors::MetricsError;

// ============================================================================
// Public Operations
// ============================================================================

/// Compute the integer part of the square root of `n`.
///
/// Returns the largest `r` with `r*r <= n`.
///
/// # Errors
///
/// * [`MetricsError::NonFiniteInput`] if `n` is NaN or infinite.
/// * [`MetricsError::NegativeInput`] if `n < 0`.
/// * [`MetricsError::UnrepresentableResult`] if the root exceeds `u64` range.
///
/// # Examples
///
/// ```rust
/// use gridmetrics::prelude::*;
///
/// assert_eq!(integer_sqrt(8.0)?, 2);
/// # Result::<(), MetricsError>::Ok(())
/// ```
pub fn integer_sqrt<T: Float>(n: T) -> Result<u64, MetricsError> {
    Validator::validate_scalar(n, "n")?;
    Validator::validate_non_negative(n)?;

    let root = floor_sqrt(n);
    root.to_u64()
        .ok_or_else(|| MetricsError::UnrepresentableResult(root.to_f64().unwrap_or(f64::NAN)))
}

/// Compute the truncated Euclidean distance between `(row1, col1)` and
/// `(row2, col2)`.
///
/// Returns `floor(sqrt(col_diff^2 + row_diff^2))`.
///
/// # Errors
///
/// * [`MetricsError::NonFiniteInput`] if any coordinate is NaN or infinite.
/// * [`MetricsError::UnrepresentableResult`] if the distance exceeds `u64`
///   range.
///
/// # Examples
///
/// ```rust
/// use gridmetrics::prelude::*;
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0)?, 5);
/// # Result::<(), MetricsError>::Ok(())
/// ```
pub fn distance<T: Float>(row1: T, col1: T, row2: T, col2: T) -> Result<u64, MetricsError> {
    Validator::validate_scalar(row1, "row1")?;
    Validator::validate_scalar(col1, "col1")?;
    Validator::validate_scalar(row2, "row2")?;
    Validator::validate_scalar(col2, "col2")?;

    let dist = grid_distance(row1, col1, row2, col2);
    dist.to_u64()
        .ok_or_else(|| MetricsError::UnrepresentableResult(dist.to_f64().unwrap_or(f64::NAN)))
}

/// Return `true` if the ratio of the smaller of `x` and `y` to the larger,
/// rounded to two decimal places, strictly exceeds the rounded two-thirds
/// cutoff (`0.67`).
///
/// # Errors
///
/// * [`MetricsError::NonFiniteInput`] if either input is NaN or infinite.
/// * [`MetricsError::ZeroDivisor`] if the larger input is zero.
///
/// # Examples
///
/// ```rust
/// use gridmetrics::prelude::*;
///
/// assert!(!is_ratio_respected(2.0, 3.0)?); // rounds to exactly 0.67
/// assert!(is_ratio_respected(3.0, 3.0)?);
/// # Result::<(), MetricsError>::Ok(())
/// ```
pub fn is_ratio_respected<T: Float>(x: T, y: T) -> Result<bool, MetricsError> {
    Validator::validate_scalar(x, "x")?;
    Validator::validate_scalar(y, "y")?;
    Validator::validate_ratio_divisor(x, y)?;

    Ok(ratio_exceeds_threshold(x, y))
}
