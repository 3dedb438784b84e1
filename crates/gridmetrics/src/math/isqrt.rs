//! Floored integer square root.
//!
//! ## Purpose
//!
//! This module computes the integer part of the real square root of a
//! non-negative value: the largest integer `r` with `r*r <= n`.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `Float` types; the root is returned as a
//!   whole-valued float so callers choose the integer conversion.
//! * **Correction**: The hardware square root can land one off at exact
//!   integer boundaries; the candidate is nudged until the floor invariant
//!   holds.
//!
//! ## Invariants
//!
//! * For validated input `n >= 0`: `r*r <= n < (r+1)*(r+1)`.
//! * The returned value is non-negative and whole.
//!
//! ## Non-goals
//!
//! * This module does not validate its input (see the engine layer).

// External dependencies
use num_traits::Float;

// ============================================================================
// Square Root Kernel
// ============================================================================

/// Compute the floored square root of a non-negative value.
///
/// Returns the largest whole-valued `r` with `r*r <= n`, as a float.
/// Input must be finite and non-negative.
#[inline]
pub fn floor_sqrt<T: Float>(n: T) -> T {
    let one = T::one();
    let mut r = n.sqrt().floor();

    // Correction only applies while adjacent integers are representable in T;
    // above that the hardware root is already the best available answer.
    if r + one == r {
        return r;
    }

    // Float sqrt may round up across an exact square boundary; step down
    // until r*r <= n.
    while r * r > n {
        r = r - one;
    }

    // Symmetric guard: step up while the next integer still fits.
    while (r + one) * (r + one) <= n {
        r = r + one;
    }

    r
}
