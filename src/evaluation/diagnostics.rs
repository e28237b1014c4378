//! Fit quality metrics for a fitted polynomial.
//!
//! ## Purpose
//!
//! This module scores a coefficient vector against a sample set. The central
//! metric is the mean squared error over the residual degrees of freedom:
//!
//! ```text
//! MSE = Σ_i (p(x_i) - y_i)² / (M - N)
//! ```
//!
//! where M is the number of samples and N the number of fitted coefficients.
//!
//! ## Design notes
//!
//! * **Degrees of freedom**: N parameters were estimated from the data, so the
//!   sum of squares is divided by `M - N`, not `M`.
//! * **Exact fits**: When `M <= N` there are no spare degrees of freedom and
//!   the MSE is defined to be zero.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * MSE, RMSE and the residual sum of squares are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not validate input lengths (the engine does).
//! * This module does not compute weighted metrics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::horner::horner;

// ============================================================================
// Residual Metrics
// ============================================================================

/// Residuals `y_i - p(x_i)` for each sample.
pub fn residuals<T: Float>(coefficients: &[T], x: &[T], y: &[T]) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| yi - horner(coefficients, xi))
        .collect()
}

/// Sum of squared residuals.
pub fn residual_sum_of_squares<T: Float>(coefficients: &[T], x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y).fold(T::zero(), |acc, (&xi, &yi)| {
        let e = horner(coefficients, xi) - yi;
        acc + e * e
    })
}

/// Mean squared error over the `M - N` residual degrees of freedom.
///
/// Returns exactly zero when there are no more samples than coefficients.
pub fn mean_squared_error<T: Float>(coefficients: &[T], x: &[T], y: &[T]) -> T {
    let m = x.len();
    let n = coefficients.len();
    if m <= n {
        return T::zero();
    }

    let dof = T::from(m - n).unwrap_or_else(T::one);
    residual_sum_of_squares(coefficients, x, y) / dof
}

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary of how well a polynomial fits a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of samples scored.
    pub samples: usize,

    /// Residual degrees of freedom, `samples - coefficients` (saturating at 0).
    pub degrees_of_freedom: usize,

    /// Sum of squared residuals.
    pub rss: T,

    /// Mean squared error over the residual degrees of freedom.
    pub mse: T,

    /// Root of `mse`.
    pub rmse: T,
}

impl<T: Float> Diagnostics<T> {
    /// Score `coefficients` against samples `(x, y)`.
    pub fn compute(coefficients: &[T], x: &[T], y: &[T]) -> Self {
        let samples = x.len();
        let rss = residual_sum_of_squares(coefficients, x, y);
        let mse = mean_squared_error(coefficients, x, y);
        Self {
            samples,
            degrees_of_freedom: samples.saturating_sub(coefficients.len()),
            rss,
            mse,
            rmse: mse.sqrt(),
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Samples:      {}", self.samples)?;
        writeln!(f, "  Residual DF:  {}", self.degrees_of_freedom)?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  MSE:          {:.6}", self.mse)?;
        write!(f, "  RMSE:         {:.6}", self.rmse)
    }
}
