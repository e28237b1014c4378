//! # polyfit-rs - Least-Squares Polynomial Fitting for Rust
//!
//! A small, dependable polynomial curve-fitting engine, generic over `f32`
//! and `f64`, that works in `no_std` environments.
//!
//! ## What does it do?
//!
//! Given sample points `(x_i, y_i)` and a number of coefficients `N`, it finds
//! the polynomial
//!
//! ```text
//! p(x) = c[0] + c[1]·x + … + c[N-1]·x^(N-1)
//! ```
//!
//! that minimises `Σ_i (p(x_i) - y_i)²`. The fitted polynomial can then be
//! evaluated anywhere with the minimum number of multiplications (Horner's
//! method) and scored with the mean squared error over its residual degrees
//! of freedom.
//!
//! **How it works:**
//!
//! 1. Assemble the normal equations `A·C = B`, where `A[j][k] = Σ x_i^(j+k)`
//!    (the moment matrix) and `B[k] = Σ y_i·x_i^k`.
//! 2. Factor `A` with scaled-partial-pivoting LU decomposition. Moment
//!    matrices are notoriously badly balanced; scaling each pivot candidate
//!    by the largest entry of its row keeps the elimination stable.
//! 3. Back-substitute to obtain the coefficients `C`.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![0.0_f64, 1.0, 2.0, 3.0];
//! let y = vec![2.1_f64, 0.7, -0.1, 1.3];
//!
//! // Three coefficients: a quadratic
//! let mut p = Polynomial::new(3)?;
//! p.fit(&x, &y)?;
//!
//! println!("C = {}", p);             // C = 2.18 -2.42 0.7 (approximately)
//! println!("p(1.5) = {}", p.value(1.5));
//! println!("mse = {}", p.mse(&x, &y)?);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<(), PolyfitError>`:
//!
//! - **`MismatchedInputs`**: `x` and `y` have different lengths.
//! - **`InvalidNumericValue`**: a sample is NaN or infinite.
//! - **`SingularSystem`**: the samples cannot determine every coefficient
//!   (e.g. fewer distinct `x` values than coefficients, or no samples at all).
//!
//! A failed fit leaves the previous coefficients in place, and the polynomial
//! can be fitted again with better data:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let mut p = Polynomial::<f64>::new(3)?;
//!
//! // A single distinct x value cannot determine a quadratic.
//! match p.fit(&[2.0, 2.0, 2.0], &[0.0, 1.0, 2.0]) {
//!     Ok(()) => unreachable!(),
//!     Err(e) => eprintln!("Fitting failed: {}", e),
//! }
//!
//! p.fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0])?;
//! assert!((p.value(3.0) - 10.0).abs() < 1e-9);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Mean Squared Error
//!
//! `mse` divides the residual sum of squares by `M - N` (samples minus
//! coefficients), not `M`, because `N` parameters were estimated from the
//! data. With `M <= N` the fit is exact (or under-determined) and the MSE is
//! defined to be zero.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Construct the polynomial once and refit it; a fit allocates nothing
//! - Keep the degree low; moment matrices lose precision quickly as it grows
//!
//! ## Logging
//!
//! Fits report progress through the [`log`](https://docs.rs/log) facade
//! (`debug` for fit start/finish and singular systems, `trace` for pivot
//! selection). No logger is installed by this crate.
//!
//! ## Non-goals
//!
//! Weighted fits, regularisation, rank-deficient systems, multivariate
//! domains, incremental updates, and arbitrary-precision arithmetic.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 0: Primitives - error type and reusable working storage.
mod primitives;

// Layer 1: Math - moment matrix assembly and the pivoted LU solver.
mod math;

// Layer 2: Algorithms - Horner evaluation.
mod algorithms;

// Layer 3: Evaluation - residuals, MSE and fit diagnostics.
mod evaluation;

// Layer 4: Engine - input validation and fit orchestration.
mod engine;

// High-level API: the `Polynomial` type.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Diagnostics, Polynomial, PolyfitError};
}

pub use api::{Diagnostics, Polynomial, PolyfitError};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
}
