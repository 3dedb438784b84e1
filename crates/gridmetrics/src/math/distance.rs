//! Truncated Euclidean distance between grid points.
//!
//! This module computes the distance between two points given as separate
//! `(row, col)` coordinate pairs, truncated to a whole value. The truncation
//! reuses the floored square root kernel, so the result satisfies the same
//! floor invariant with respect to the squared distance.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::isqrt::floor_sqrt;

// ============================================================================
// Distance Kernel
// ============================================================================

/// Compute the truncated Euclidean distance between `(row1, col1)` and
/// `(row2, col2)`.
///
/// Returns `floor(sqrt(col_diff^2 + row_diff^2))` as a non-negative
/// whole-valued float. Inputs must be finite.
#[inline]
pub fn grid_distance<T: Float>(row1: T, col1: T, row2: T, col2: T) -> T {
    let col_diff = (col1 - col2).abs();
    let row_diff = (row1 - row2).abs();
    floor_sqrt(col_diff * col_diff + row_diff * row_diff)
}
