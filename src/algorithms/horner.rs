//! Polynomial evaluation by Horner's method.
//!
//! ## Purpose
//!
//! Evaluates `c[0] + c[1]·x + … + c[N-1]·x^(N-1)` as the nested product
//!
//! ```text
//! ((c[N-1]·x + c[N-2])·x + … + c[1])·x + c[0]
//! ```
//!
//! which uses exactly N-1 multiplications and N-1 additions.
//!
//! ## Invariants
//!
//! * Pure: evaluation never mutates the coefficients.
//! * A single coefficient is returned unchanged (no multiplications).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Evaluate the polynomial with ascending-order `coefficients` at `x`.
///
/// An empty coefficient slice evaluates to zero.
#[inline]
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    let Some((&leading, rest)) = coefficients.split_last() else {
        return T::zero();
    };
    rest.iter().rev().fold(leading, |acc, &c| acc * x + c)
}

/// Evaluate the polynomial at every point of `xs`.
pub fn horner_all<T: Float>(coefficients: &[T], xs: &[T]) -> Vec<T> {
    xs.iter().map(|&x| horner(coefficients, x)).collect()
}
