//! Working storage for the normal-equations solver.
//!
//! ## Purpose
//!
//! This module provides the scratch space (`FittingBuffer`) a polynomial owns
//! for the lifetime of the instance: the moment matrix, the right-hand side,
//! the per-row scale factors, the pivot permutation, and the solution vector.
//! The buffer is allocated once at construction and recycled by every `fit`.
//!
//! ## Design notes
//!
//! * **Flat matrix**: The N×N moment matrix is stored row-major in a single
//!   `Vec<T>`; row `r` occupies `r * n .. (r + 1) * n`.
//! * **Fixed size**: The coefficient count never changes after construction,
//!   so buffers are sized once and never grown or shrunk.
//! * **Scratch solution**: The solver writes into `solution` and the caller
//!   publishes it only on success, so a failed solve never leaks partial state.
//!
//! ## Invariants
//!
//! * `matrix.len() == n * n`; every other slot has length `n`.
//! * Contents are meaningful only during and after a fit; every fit rewrites
//!   them from scratch.
//!
//! ## Non-goals
//!
//! * Sharing one buffer across polynomial instances (each instance owns its own).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A fixed-length vector slot reused across fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T>(Vec<T>);

impl<T: Clone> Slot<T> {
    /// Create a slot of `len` copies of `value`.
    #[inline]
    pub fn filled(len: usize, value: T) -> Self {
        Self(vec![value; len])
    }
}

impl<T> Deref for Slot<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Slot<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

// ============================================================================
// Fitting Buffer
// ============================================================================

/// Persistent buffers for the moment matrix and its LU factorisation.
#[derive(Debug, Clone, PartialEq)]
pub struct FittingBuffer<T> {
    /// Number of coefficients (matrix dimension).
    n: usize,
    /// Moment matrix A, overwritten in place by the LU factors.
    pub matrix: Slot<T>,
    /// Right-hand side B, overwritten in place during elimination.
    pub rhs: Slot<T>,
    /// Per-row scale factors S (largest absolute entry of each row).
    pub scale: Slot<T>,
    /// Pivot order P; row `permutation[i]` plays the role of row `i`.
    pub permutation: Slot<usize>,
    /// Back-substituted coefficients of the most recent solve.
    pub solution: Slot<T>,
}

impl<T: Float> FittingBuffer<T> {
    /// Allocate zeroed buffers for an `n`-coefficient system.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            matrix: Slot::filled(n * n, T::zero()),
            rhs: Slot::filled(n, T::zero()),
            scale: Slot::filled(n, T::zero()),
            permutation: Slot::from((0..n).collect::<Vec<_>>()),
            solution: Slot::filled(n, T::zero()),
        }
    }
}

impl<T> FittingBuffer<T> {
    /// Matrix dimension (number of coefficients).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Row `r` of the moment matrix.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.matrix[r * self.n..(r + 1) * self.n]
    }
}
