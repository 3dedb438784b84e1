#![cfg(feature = "dev")]
//! Tests for the floored square root kernel.
//!
//! These tests verify the integer square root used by gridmetrics for:
//! - Truncation toward zero from the real square root
//! - The floor invariant `r*r <= n < (r+1)*(r+1)`
//! - Correction at exact-square boundaries
//! - Generic behavior across float widths
//!
//! ## Test Organization
//!
//! 1. **Value Tests** - Known inputs and expected roots
//! 2. **Invariant Tests** - Floor invariant over sampled ranges
//! 3. **Boundary Tests** - Exact squares and off-by-one neighbors
//! 4. **Genericity** - f32 and f64 behavior

use gridmetrics::internals::math::isqrt::floor_sqrt;

// ============================================================================
// Value Tests
// ============================================================================

/// Test roots of small known inputs.
///
/// Verifies truncation: 8 has real root 2.828..., integer part 2.
#[test]
fn test_floor_sqrt_known_values() {
    assert_eq!(floor_sqrt(0.0f64), 0.0);
    assert_eq!(floor_sqrt(1.0f64), 1.0);
    assert_eq!(floor_sqrt(4.0f64), 2.0);
    assert_eq!(floor_sqrt(8.0f64), 2.0);
    assert_eq!(floor_sqrt(9.0f64), 3.0);
    assert_eq!(floor_sqrt(15.0f64), 3.0);
    assert_eq!(floor_sqrt(16.0f64), 4.0);
}

/// Test fractional inputs.
///
/// Verifies that the integer part of the real root is returned, not the
/// root of a rounded input.
#[test]
fn test_floor_sqrt_fractional_input() {
    assert_eq!(floor_sqrt(0.25f64), 0.0);
    assert_eq!(floor_sqrt(2.25f64), 1.0); // real root 1.5
    assert_eq!(floor_sqrt(10.9f64), 3.0);
}

// ============================================================================
// Invariant Tests
// ============================================================================

/// Test the floor invariant over a contiguous range.
///
/// Verifies `r*r <= n < (r+1)*(r+1)` for every integer input in [0, 10_000].
#[test]
fn test_floor_sqrt_invariant_small_range() {
    for i in 0..=10_000u32 {
        let n = f64::from(i);
        let r = floor_sqrt(n);

        assert!(r >= 0.0, "root must be non-negative for n={n}");
        assert!(r * r <= n, "r*r must not exceed n for n={n}, got r={r}");
        assert!(
            (r + 1.0) * (r + 1.0) > n,
            "(r+1)^2 must exceed n for n={n}, got r={r}"
        );
    }
}

/// Test the floor invariant on large sampled inputs.
#[test]
fn test_floor_sqrt_invariant_large_inputs() {
    // Kept below 2^52 so every square involved is exactly representable.
    let samples = [1e6f64, 123_456_789.0, 1e12, 2.5e15, 4.4e15];

    for &n in &samples {
        let r = floor_sqrt(n);
        assert!(r * r <= n, "r*r must not exceed n for n={n}");
        assert!((r + 1.0) * (r + 1.0) > n, "(r+1)^2 must exceed n for n={n}");
    }
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Test exact squares and their immediate neighbors.
///
/// One below an exact square is where a rounded-up hardware root would
/// otherwise report the wrong integer.
#[test]
fn test_floor_sqrt_exact_square_boundaries() {
    // 2^52 = (2^26)^2, exactly representable in f64.
    let big_square = (1u64 << 52) as f64;
    let big_root = (1u64 << 26) as f64;

    assert_eq!(floor_sqrt(big_square), big_root);
    assert_eq!(floor_sqrt(big_square - 1.0), big_root - 1.0);
    assert_eq!(floor_sqrt(big_square + 1.0), big_root);

    // Mid-sized exact square.
    assert_eq!(floor_sqrt(1_000_000.0f64), 1000.0);
    assert_eq!(floor_sqrt(999_999.0f64), 999.0);
}

// ============================================================================
// Genericity
// ============================================================================

/// Test f32 inputs.
///
/// Verifies the kernel is generic over float width.
#[test]
fn test_floor_sqrt_f32() {
    assert_eq!(floor_sqrt(0.0f32), 0.0);
    assert_eq!(floor_sqrt(8.0f32), 2.0);
    assert_eq!(floor_sqrt(144.0f32), 12.0);

    for i in 0..=1000u32 {
        let n = i as f32;
        let r = floor_sqrt(n);
        assert!(r * r <= n, "f32 floor invariant failed for n={n}");
        assert!((r + 1.0) * (r + 1.0) > n, "f32 floor invariant failed for n={n}");
    }
}
