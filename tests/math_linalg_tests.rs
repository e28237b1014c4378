#![cfg(feature = "dev")]
//! Tests for moment assembly and the pivoted LU solver.
//!
//! These tests verify the numerical core used by every fit:
//! - Moment matrix symmetry and Hankel structure
//! - Agreement with nalgebra's LU solver on the same system
//! - Residual of the solved system against the original matrix
//! - Pivot order through the permutation vector
//!
//! ## Test Organization
//!
//! 1. **Assembly** - Structure of the normal equations
//! 2. **Solver** - Cross-check and residual invariant
//! 3. **Pivoting** - Permutation behaviour and singular detection

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};

use polyfit_rs::internals::math::linalg;
use polyfit_rs::internals::math::moments::{assemble_moments, ipow};
use polyfit_rs::internals::primitives::buffer::FittingBuffer;
use polyfit_rs::internals::primitives::errors::PolyfitError;

// ============================================================================
// Helper Functions
// ============================================================================

fn linspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| lo + (hi - lo) * i as f64 / (count - 1) as f64)
        .collect()
}

fn noisy_cubic(x: &[f64]) -> Vec<f64> {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 0.5 - xi + 0.25 * xi * xi * xi + if i % 2 == 0 { 0.05 } else { -0.05 })
        .collect()
}

// ============================================================================
// Assembly Tests
// ============================================================================

/// The moment matrix is symmetric and constant along anti-diagonals.
#[test]
fn test_moment_matrix_is_hankel() {
    let x = linspace(-2.0, 3.0, 9);
    let y = noisy_cubic(&x);
    let n = 5;
    let mut buf = FittingBuffer::new(n);
    assemble_moments(&x, &y, &mut buf);

    for j in 0..n {
        for k in 0..n {
            assert_eq!(buf.matrix[j * n + k], buf.matrix[k * n + j]);
            let direct: f64 = x.iter().map(|&xi| ipow(xi, j + k)).sum();
            assert_relative_eq!(buf.matrix[j * n + k], direct, max_relative = 1e-12);
        }
    }
    assert_eq!(buf.matrix[0], x.len() as f64);
}

// ============================================================================
// Solver Tests
// ============================================================================

/// Scaled-pivoting LU agrees with nalgebra's LU on the same normal equations.
#[test]
fn test_solution_matches_nalgebra_lu() {
    let x = linspace(-2.0, 3.0, 9);
    let y = noisy_cubic(&x);
    let n = 5;
    let mut buf = FittingBuffer::new(n);
    assemble_moments(&x, &y, &mut buf);

    let a = DMatrix::from_row_slice(n, n, &buf.matrix[..]);
    let b = DVector::from_column_slice(&buf.rhs[..]);
    let reference = a.lu().solve(&b).expect("reference solve");

    linalg::solve(&mut buf).unwrap();
    for i in 0..n {
        assert_relative_eq!(buf.solution[i], reference[i], epsilon = 1e-8);
    }
}

/// The solution satisfies the original (pre-elimination) system.
#[test]
fn test_solution_satisfies_original_system() {
    let x = linspace(0.0, 10.0, 15);
    let y: Vec<f64> = x.iter().map(|&xi| (xi / 3.0).sin()).collect();
    let n = 4;
    let mut buf = FittingBuffer::new(n);
    assemble_moments(&x, &y, &mut buf);

    let a = DMatrix::from_row_slice(n, n, &buf.matrix[..]);
    let b = DVector::from_column_slice(&buf.rhs[..]);

    linalg::solve(&mut buf).unwrap();
    let c = DVector::from_column_slice(&buf.solution[..]);
    let residual = &a * &c - &b;
    assert!(residual.norm() <= 1e-9 * b.norm());
}

// ============================================================================
// Pivoting Tests
// ============================================================================

/// The permutation is a permutation of 0..n after a solve.
#[test]
fn test_permutation_is_valid() {
    let x = linspace(1.0, 4.0, 6);
    let y = noisy_cubic(&x);
    let n = 4;
    let mut buf = FittingBuffer::new(n);
    assemble_moments(&x, &y, &mut buf);
    linalg::solve(&mut buf).unwrap();

    let mut seen = buf.permutation.to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

/// Scale factors are the largest absolute entry of each row.
#[test]
fn test_scale_factors() {
    let mut buf = FittingBuffer::new(2);
    buf.matrix.copy_from_slice(&[-3.0, 2.0, 0.5, -0.25]);
    linalg::compute_scale_factors(&mut buf).unwrap();
    assert_eq!(&buf.scale[..], &[3.0, 0.5]);
    assert_eq!(&buf.permutation[..], &[0, 1]);
}

/// Duplicated abscissae cannot determine all coefficients.
#[test]
fn test_duplicate_x_is_singular() {
    let mut buf = FittingBuffer::new(3);
    assemble_moments(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0], &mut buf);
    assert_eq!(
        linalg::solve(&mut buf),
        Err(PolyfitError::SingularSystem { column: 1 })
    );
}
