//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting or
//! scoring a polynomial: malformed input, an invalid coefficient count, and a
//! normal-equations system that cannot be solved.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (lengths,
//!   the offending pivot column).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Mismatched lengths, non-finite values.
//! 2. **Construction**: A polynomial needs at least one coefficient.
//! 3. **Solver failure**: Zero or numerically-zero pivots, overflowing coefficients.
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

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfitError {
    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A polynomial needs at least one coefficient.
    InvalidOrder(usize),

    /// The moment matrix is singular or too ill-conditioned to factor.
    ///
    /// Typical causes are fewer distinct `x` values than coefficients, or an
    /// empty sample set.
    SingularSystem {
        /// Pivot column (or coefficient index) at which the solve broke down.
        column: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyfitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid order count: {order} (must be at least 1)")
            }
            Self::SingularSystem { column } => {
                write!(f, "Singular system: no usable pivot in column {column}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyfitError {}
