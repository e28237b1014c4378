#![cfg(feature = "dev")]
//! Tests for fit-quality metrics.
//!
//! ## Test Organization
//!
//! 1. **Metrics** - RSS, MSE and residual relations
//! 2. **Optimality** - The least-squares fit minimises RSS
//! 3. **Display** - Diagnostics formatting

use approx::assert_relative_eq;
use rand::prelude::*;
use rand_distr::Normal;

use polyfit_rs::internals::algorithms::horner::horner_all;
use polyfit_rs::internals::evaluation::diagnostics::{
    Diagnostics, mean_squared_error, residual_sum_of_squares, residuals,
};
use polyfit_rs::prelude::*;

fn noisy_quadratic(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.2).unwrap();
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.25 - 2.0).collect();
    let y = x
        .iter()
        .map(|&xi| 1.0 - 0.5 * xi + 0.75 * xi * xi + noise.sample(&mut rng))
        .collect();
    (x, y)
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_rss_matches_squared_residuals() {
    let (x, y) = noisy_quadratic(17, 1);
    let c = [0.9, -0.4, 0.8];
    let r = residuals(&c, &x, &y);
    let direct: f64 = r.iter().map(|e| e * e).sum();
    assert_relative_eq!(residual_sum_of_squares(&c, &x, &y), direct, max_relative = 1e-12);
}

#[test]
fn test_residuals_match_horner() {
    let (x, y) = noisy_quadratic(9, 2);
    let c = [0.3, 0.1, -0.2];
    let fitted = horner_all(&c, &x);
    for ((r, f), yi) in residuals(&c, &x, &y).iter().zip(&fitted).zip(&y) {
        assert_relative_eq!(*r, yi - f, epsilon = 1e-15);
    }
}

#[test]
fn test_mse_divides_by_residual_dof() {
    let (x, y) = noisy_quadratic(20, 3);
    let c = [1.0, -0.5, 0.75];
    let rss = residual_sum_of_squares(&c, &x, &y);
    assert_relative_eq!(mean_squared_error(&c, &x, &y), rss / 17.0, max_relative = 1e-12);
}

// ============================================================================
// Optimality
// ============================================================================

#[test]
fn test_fit_minimises_rss() {
    let (x, y) = noisy_quadratic(33, 4);
    let mut p = Polynomial::new(3).unwrap();
    p.fit(&x, &y).unwrap();
    let best = residual_sum_of_squares(p.coefficients(), &x, &y);

    for k in 0..3 {
        for delta in [-1e-3, 1e-3] {
            let mut c = p.coefficients().to_vec();
            c[k] += delta;
            assert!(residual_sum_of_squares(&c, &x, &y) > best);
        }
    }
}

#[test]
fn test_diagnostics_agree_with_api() {
    let (x, y) = noisy_quadratic(25, 5);
    let mut p = Polynomial::new(3).unwrap();
    p.fit(&x, &y).unwrap();

    let d = Diagnostics::compute(p.coefficients(), &x, &y);
    assert_eq!(d.samples, 25);
    assert_eq!(d.degrees_of_freedom, 22);
    assert_relative_eq!(d.mse, p.mse(&x, &y).unwrap(), max_relative = 1e-12);
    assert_relative_eq!(d.rmse, p.rmse(&x, &y).unwrap(), max_relative = 1e-12);
    assert_relative_eq!(d.rss / 22.0, d.mse, max_relative = 1e-12);
}

#[test]
fn test_diagnostics_without_spare_samples() {
    let d = Diagnostics::compute(&[1.0_f64, 2.0], &[0.0, 1.0], &[0.0, 0.0]);
    assert_eq!(d.degrees_of_freedom, 0);
    assert_eq!(d.mse, 0.0);
    assert_eq!(d.rmse, 0.0);
    assert_eq!(d.rss, 10.0);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_diagnostics_display() {
    let d = Diagnostics::compute(&[1.0_f64], &[0.0, 1.0, 2.0], &[0.0, 2.0, 0.0]);
    let s = d.to_string();
    assert!(s.starts_with("Fit Diagnostics:"));
    assert!(s.contains("Samples:      3"));
    assert!(s.contains("Residual DF:  2"));
    assert!(s.contains("RSS:          3.000000"));
    assert!(s.contains("MSE:          1.500000"));
}
