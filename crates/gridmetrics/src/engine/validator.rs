//! Input validation for gridmetrics operations.
//!
//! ## Purpose
//!
//! This module provides validation functions for the numeric helpers. It
//! checks finiteness, sign constraints, and the ratio divisor before any
//! math kernel runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Domain Bounds**: Enforces constraints like `n >= 0` for square roots.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct input data.
//! * This module does not perform the numeric computation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MetricsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for gridmetrics input.
///
/// Provides static methods for validating caller input. All methods return
/// `Result<(), MetricsError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), MetricsError> {
        if !val.is_finite() {
            return Err(MetricsError::NonFiniteInput(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that a square-root input is non-negative.
    pub fn validate_non_negative<T: Float>(n: T) -> Result<(), MetricsError> {
        if n < T::zero() {
            return Err(MetricsError::NegativeInput(n.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate that the ratio divisor (the larger of the two inputs) is
    /// nonzero.
    pub fn validate_ratio_divisor<T: Float>(x: T, y: T) -> Result<(), MetricsError> {
        let divisor = if x > y { x } else { y };
        if divisor == T::zero() {
            return Err(MetricsError::ZeroDivisor {
                x: x.to_f64().unwrap_or(f64::NAN),
                y: y.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}
