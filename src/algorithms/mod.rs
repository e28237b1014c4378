//! Layer 2: Algorithms
//!
//! This layer implements evaluation of a fitted polynomial. It only reads a
//! coefficient slice and knows nothing about how the coefficients were found.

// Horner evaluation.
pub mod horner;
