//! # gridmetrics — integer grid distance and ratio primitives
//!
//! Small, pure numeric helpers: floored integer square root, truncated
//! Euclidean distance between grid points, and a two-thirds ratio-threshold
//! check. All functions are stateless, synchronous, and reentrant.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmetrics::prelude::*;
//!
//! // Integer part of a square root
//! assert_eq!(integer_sqrt(8.0)?, 2);
//!
//! // Truncated distance between (row, col) points
//! assert_eq!(distance(0.0, 0.0, 3.0, 4.0)?, 5);
//!
//! // Does the smaller-to-larger ratio exceed two-thirds?
//! assert!(is_ratio_respected(3.0, 3.0)?);
//! assert!(!is_ratio_respected(1.0, 3.0)?);
//! # Result::<(), MetricsError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Precondition violations are typed errors, never panics:
//!
//! ```rust
//! use gridmetrics::prelude::*;
//!
//! assert!(matches!(integer_sqrt(-1.0), Err(MetricsError::NegativeInput(_))));
//! assert!(matches!(
//!     is_ratio_respected(0.0, 0.0),
//!     Err(MetricsError::ZeroDivisor { .. })
//! ));
//! ```
//!
//! ## `no_std` Support
//!
//! Disable the default `std` feature to use the crate in `no_std`
//! environments; the kernels fall back to `libm` through `num-traits`.
//! Error messages still require `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure numeric kernels.
mod math;

// Layer 3: Engine - input validation.
mod engine;

// High-level validated API.
mod api;

// Standard gridmetrics prelude.
pub mod prelude {
    pub use crate::api::{MetricsError, distance, integer_sqrt, is_ratio_respected};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
