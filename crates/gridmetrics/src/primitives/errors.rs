//! Error types for gridmetrics operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when evaluating
//! the numeric helpers: domain violations, non-finite inputs, and results
//! that cannot be represented in the integer output type.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., the negative
//!   input, the `name=value` pair that was non-finite).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Domain errors**: Negative square-root input, zero ratio divisor.
//! 2. **Input validation**: Non-finite (NaN/infinite) values.
//! 3. **Range errors**: Roots too large for the `u64` output type.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for gridmetrics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// Square root requires a non-negative input.
    NegativeInput(f64),

    /// An input was NaN or infinite; carries a `name=value` description.
    NonFiniteInput(String),

    /// Ratio check requires that the larger of the two inputs is nonzero.
    ZeroDivisor {
        /// First input to the ratio check.
        x: f64,
        /// Second input to the ratio check.
        y: f64,
    },

    /// The truncated root does not fit in the `u64` output type.
    UnrepresentableResult(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MetricsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NegativeInput(n) => {
                write!(f, "Invalid square root input: {n} (must be >= 0)")
            }
            Self::NonFiniteInput(s) => write!(f, "Invalid numeric value: {s}"),
            Self::ZeroDivisor { x, y } => {
                write!(f, "Invalid ratio inputs: x={x}, y={y} (larger value must be nonzero)")
            }
            Self::UnrepresentableResult(r) => {
                write!(f, "Result out of range: {r} (does not fit in u64)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MetricsError {}
