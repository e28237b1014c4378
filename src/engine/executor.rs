//! Execution engine for least-squares fits.
//!
//! ## Purpose
//!
//! This module orchestrates one fit: validate the samples, assemble the
//! moment matrix into the caller's working buffer, solve it, and publish the
//! solution into the caller's coefficient vector.
//!
//! ## Design notes
//!
//! * **Reused storage**: All scratch space lives in a `FittingBuffer` owned by
//!   the caller and sized once; a fit allocates nothing.
//! * **All-or-nothing**: Coefficients are copied out of the buffer only after
//!   the solve succeeds, so a failed fit leaves them untouched.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * `coefficients.len() == buffer.dim()`.
//! * Every fit rebuilds the system from the samples it is given; nothing
//!   carries over from previous fits.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg;
use crate::math::moments::assemble_moments;
use crate::primitives::buffer::FittingBuffer;
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Executor
// ============================================================================

/// Runs least-squares fits against a caller-owned buffer.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit `coefficients.len()` coefficients to samples `(x, y)`.
    ///
    /// On error, `coefficients` keeps its previous contents.
    pub fn run<T: Float>(
        x: &[T],
        y: &[T],
        buffer: &mut FittingBuffer<T>,
        coefficients: &mut [T],
    ) -> Result<(), PolyfitError> {
        debug_assert_eq!(coefficients.len(), buffer.dim());
        Validator::validate_inputs(x, y)?;

        log::debug!(
            "fitting {} coefficients to {} samples",
            buffer.dim(),
            x.len()
        );

        assemble_moments(x, y, buffer);
        linalg::solve(buffer)?;

        coefficients.copy_from_slice(&buffer.solution);
        log::debug!("fit complete, pivot order {:?}", &buffer.permutation[..]);
        Ok(())
    }
}
