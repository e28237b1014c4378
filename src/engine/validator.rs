//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module checks construction parameters and sample data before any
//! numerical work starts, so malformed input fails with a precise error
//! instead of reading out of bounds or poisoning the moment matrix.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Paired samples**: `x` and `y` must have the same length.
//! * **Finite Checks**: Fit inputs must not contain NaN or ±∞.
//! * **Order count**: A polynomial has at least one coefficient.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect singular systems (the solver does).
//! * This module does not reject empty sample sets; they surface as singular.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for polynomial construction and sample data.
///
/// All methods return `Result<(), PolyfitError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the number of coefficients requested for a polynomial.
    pub fn validate_order(order_count: usize) -> Result<(), PolyfitError> {
        if order_count == 0 {
            return Err(PolyfitError::InvalidOrder(order_count));
        }
        Ok(())
    }

    /// Validate that `x` and `y` pair up one-to-one.
    pub fn validate_lengths<T>(x: &[T], y: &[T]) -> Result<(), PolyfitError> {
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate sample data for fitting: matching lengths, all values finite.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), PolyfitError> {
        Self::validate_lengths(x, y)?;

        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }
}
