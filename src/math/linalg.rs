//! Scaled-partial-pivoting LU solver for the moment matrix.
//!
//! ## Purpose
//!
//! This module solves the normal equations `A·C = B` assembled by
//! [`moments`](super::moments). Polynomial moment matrices are badly balanced:
//! the low-power rows hold small sums while the high-power rows hold sums of
//! `x^(2N-2)`, many orders of magnitude larger. Plain partial pivoting would
//! always pick the large rows; scaling every candidate by its row's largest
//! entry compares pivots by relative significance instead.
//!
//! ## Design notes
//!
//! * **Permutation vector**: Rows are never swapped physically. The pivot
//!   order lives in `permutation`, and row `permutation[i]` plays the role of
//!   row `i` during elimination and back substitution.
//! * **In place**: The matrix holds both triangular factors after
//!   decomposition; the right-hand side is forward-substituted alongside.
//! * **Fail fast**: An all-zero row, a column with no non-zero pivot left, or
//!   a non-finite coefficient aborts with
//!   [`PolyfitError::SingularSystem`].
//!
//! ## Key concepts
//!
//! 1. **Scale factors**: `S[r] = max_j |A[r][j]|`, computed once before elimination.
//! 2. **Pivot choice**: the remaining row maximising `|A[r][k]| / S[r]`.
//! 3. **Back substitution**: upper-triangular solve through the permutation.
//!
//! ## Invariants
//!
//! * On success, `A_original · C ≈ B_original` within floating-point tolerance.
//! * `permutation` is a permutation of `0..n` after every call.
//!
//! ## Non-goals
//!
//! * This module does not handle rank-deficient systems (no SVD fallback).
//! * This module does not refine solutions iteratively.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::FittingBuffer;
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Solver Stages
// ============================================================================

/// Compute per-row scale factors and reset the permutation to identity.
pub fn compute_scale_factors<T: Float>(buffer: &mut FittingBuffer<T>) -> Result<(), PolyfitError> {
    let n = buffer.dim();
    for k in 0..n {
        buffer.permutation[k] = k;
        let s = buffer
            .row(k)
            .iter()
            .fold(T::zero(), |acc, &v| if v.abs() > acc { v.abs() } else { acc });

        if s <= T::zero() || !s.is_finite() {
            log::debug!("moment matrix row {k} has scale {:?}", s.to_f64());
            return Err(PolyfitError::SingularSystem { column: k });
        }
        buffer.scale[k] = s;
    }
    Ok(())
}

/// Factor the matrix in place with scaled partial pivoting, carrying the
/// right-hand side through the forward elimination.
///
/// Requires scale factors from [`compute_scale_factors`].
pub fn decompose<T: Float>(buffer: &mut FittingBuffer<T>) -> Result<(), PolyfitError> {
    let n = buffer.dim();

    for k in 0..n {
        // Pivot selection over the remaining rows.
        let scaled = |buf: &FittingBuffer<T>, i: usize| {
            let r = buf.permutation[i];
            buf.matrix[r * n + k].abs() / buf.scale[r]
        };
        let mut best = k;
        let mut best_mag = scaled(&*buffer, k);
        for i in (k + 1)..n {
            let mag = scaled(&*buffer, i);
            if mag > best_mag {
                best = i;
                best_mag = mag;
            }
        }
        buffer.permutation.swap(k, best);

        log::trace!(
            "pivot column {k}: row {} (scaled magnitude {:?})",
            buffer.permutation[k],
            best_mag.to_f64()
        );

        // Only an exactly vanished column is singular; regular moment
        // matrices can leave scaled pivots of a few ulps.
        if !best_mag.is_finite() || best_mag == T::zero() {
            log::debug!(
                "singular moment matrix at column {k} (scaled pivot {:?})",
                best_mag.to_f64()
            );
            return Err(PolyfitError::SingularSystem { column: k });
        }

        // Eliminate column k below the pivot.
        let pivot_row = buffer.permutation[k];
        let pivot = buffer.matrix[pivot_row * n + k];
        for i in (k + 1)..n {
            let r = buffer.permutation[i];
            let m = buffer.matrix[r * n + k] / pivot;
            for j in (k + 1)..n {
                let upper = buffer.matrix[pivot_row * n + j];
                buffer.matrix[r * n + j] = buffer.matrix[r * n + j] - m * upper;
            }
            buffer.rhs[r] = buffer.rhs[r] - m * buffer.rhs[pivot_row];
        }
    }
    Ok(())
}

/// Solve the factored upper-triangular system into `buffer.solution`.
pub fn back_substitute<T: Float>(buffer: &mut FittingBuffer<T>) -> Result<(), PolyfitError> {
    let n = buffer.dim();
    for i in (0..n).rev() {
        let r = buffer.permutation[i];
        let mut c = buffer.rhs[r];
        for j in (i + 1)..n {
            c = c - buffer.matrix[r * n + j] * buffer.solution[j];
        }
        c = c / buffer.matrix[r * n + i];

        if !c.is_finite() {
            log::debug!("coefficient {i} is not finite after back substitution");
            return Err(PolyfitError::SingularSystem { column: i });
        }
        buffer.solution[i] = c;
    }
    Ok(())
}

/// Solve the assembled system held in `buffer`.
///
/// On success the coefficients are in `buffer.solution`; the matrix and
/// right-hand side are overwritten either way.
pub fn solve<T: Float>(buffer: &mut FittingBuffer<T>) -> Result<(), PolyfitError> {
    compute_scale_factors(buffer)?;
    decompose(buffer)?;
    back_substitute(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn load(rows: &[&[f64]], rhs: &[f64]) -> FittingBuffer<f64> {
        let mut buf = FittingBuffer::new(rhs.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                buf.matrix[r * rhs.len() + c] = v;
            }
        }
        buf.rhs.copy_from_slice(rhs);
        buf
    }

    #[test]
    fn solves_small_dense_system() {
        // 2a + b - c = 8; -3a - b + 2c = -11; -2a + b + 2c = -3  =>  (2, 3, -1)
        let mut buf = load(
            &[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
        );
        solve(&mut buf).unwrap();
        assert_relative_eq!(buf.solution[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(buf.solution[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(buf.solution[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn pivots_past_zero_diagonal() {
        let mut buf = load(&[&[0.0, 1.0], &[1.0, 0.0]], &[5.0, 7.0]);
        solve(&mut buf).unwrap();
        assert_eq!(&buf.permutation[..], &[1, 0]);
        assert_eq!(&buf.solution[..], &[7.0, 5.0]);
    }

    #[test]
    fn scaling_prefers_relatively_larger_pivot() {
        // Row 0 is large in absolute terms but its first entry is tiny
        // relative to the rest of the row.
        let mut buf = load(&[&[10.0, 1.0e6], &[1.0, 1.0]], &[1.0e6, 2.0]);
        compute_scale_factors(&mut buf).unwrap();
        decompose(&mut buf).unwrap();
        assert_eq!(buf.permutation[0], 1);
        back_substitute(&mut buf).unwrap();
        assert_relative_eq!(buf.solution[0] + buf.solution[1], 2.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_row_is_singular() {
        let mut buf = load(&[&[1.0, 2.0], &[0.0, 0.0]], &[1.0, 0.0]);
        assert_eq!(
            solve(&mut buf),
            Err(PolyfitError::SingularSystem { column: 1 })
        );
    }

    #[test]
    fn dependent_rows_are_singular() {
        let mut buf = load(&[&[2.0, 4.0], &[1.0, 2.0]], &[1.0, 3.0]);
        assert_eq!(
            solve(&mut buf),
            Err(PolyfitError::SingularSystem { column: 1 })
        );
    }

    #[test]
    fn tiny_scaled_pivots_are_accepted() {
        // The second pivot is a single ulp, yet the system is regular.
        let e = f64::EPSILON;
        let mut buf = load(&[&[1.0, 1.0], &[1.0, 1.0 + e]], &[1.0, 1.0 + e]);
        solve(&mut buf).unwrap();
        assert_eq!(&buf.solution[..], &[0.0, 1.0]);
    }
}
