//! Moment matrix assembly for polynomial least squares.
//!
//! ## Purpose
//!
//! This module builds the normal equations `A·C = B` of a polynomial
//! least-squares fit directly from the samples, without materialising the
//! Vandermonde design matrix:
//!
//! ```text
//! A[j][k] = Σ_i x_i^(j+k)        B[k] = Σ_i y_i · x_i^k
//! ```
//!
//! ## Design notes
//!
//! * **Hankel structure**: `A[j][k]` depends only on `j + k`, so each power
//!   sum is computed once and written along its anti-diagonal (2N-1 sums
//!   instead of N²).
//! * **Reproducible powers**: Powers use repeated multiplication (`ipow`),
//!   never `powf`, so results are bit-identical across platforms for a given
//!   float type.
//!
//! ## Invariants
//!
//! * The assembled matrix is symmetric.
//! * Every cell of the matrix and right-hand side is rewritten on each call.
//!
//! ## Non-goals
//!
//! * This module does not detect singular systems (the solver does).
//! * This module does not validate input lengths (the engine does).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::FittingBuffer;

// ============================================================================
// Powers
// ============================================================================

/// Compute `x^n` by repeated multiplication.
#[inline]
pub fn ipow<T: Float>(x: T, n: usize) -> T {
    let mut r = T::one();
    for _ in 0..n {
        r = r * x;
    }
    r
}

// ============================================================================
// Assembly
// ============================================================================

/// Fill `buffer.matrix` and `buffer.rhs` with the normal equations for
/// samples `(x, y)`.
///
/// The number of coefficients is taken from the buffer. `x` and `y` must have
/// equal length; an empty sample set yields an all-zero system.
pub fn assemble_moments<T: Float>(x: &[T], y: &[T], buffer: &mut FittingBuffer<T>) {
    debug_assert_eq!(x.len(), y.len());

    let n = buffer.dim();
    if n == 0 {
        return;
    }

    for p in 0..(2 * n - 1) {
        let mut s = T::zero();
        let mut b = T::zero();
        for (&xi, &yi) in x.iter().zip(y) {
            let t = ipow(xi, p);
            s = s + t;
            if p < n {
                b = b + yi * t;
            }
        }

        if p < n {
            buffer.rhs[p] = b;
        }

        // Anti-diagonal j + k == p, clipped to the matrix.
        let lo = p.saturating_sub(n - 1);
        let hi = p.min(n - 1);
        for j in lo..=hi {
            buffer.matrix[j * n + (p - j)] = s;
        }
    }
}
