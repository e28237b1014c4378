//! High-level API for polynomial least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing type, [`Polynomial`]: a
//! fixed-order polynomial that can be fitted to sample data, evaluated, and
//! scored.
//!
//! ## Design notes
//!
//! * **Fixed order**: The number of coefficients is chosen at construction and
//!   never changes; all solver storage is allocated up front.
//! * **Refittable**: `fit` may be called any number of times. Each call
//!   rebuilds the normal equations from the samples it is given.
//! * **All-or-nothing**: A failed fit returns an error and leaves the previous
//!   coefficients in place.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Order count**: number of coefficients, i.e. degree + 1.
//! * **Coefficient order**: index `i` holds the coefficient of `x^i`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::horner::{horner, horner_all};
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics;
use crate::primitives::buffer::FittingBuffer;

// Publicly re-exported types
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::PolyfitError;

// ============================================================================
// Polynomial
// ============================================================================

/// A polynomial of fixed order with least-squares fitting support.
///
/// ```
/// use polyfit_rs::prelude::*;
///
/// let x = [0.0_f64, 1.0, 2.0, 3.0];
/// let y = [2.1_f64, 0.7, -0.1, 1.3];
///
/// let mut p = Polynomial::new(3)?;
/// p.fit(&x, &y)?;
///
/// assert!((p[2] - 0.7).abs() < 1e-9);
/// assert!((p.value(1.0) - 0.46).abs() < 1e-9);
/// assert!((p.mse(&x, &y)? - 0.128).abs() < 1e-9);
/// # Result::<(), PolyfitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial<T> {
    /// Coefficients in ascending power order.
    coefficients: Vec<T>,

    /// Moment matrix and LU scratch space, reused across fits.
    buffer: FittingBuffer<T>,
}

impl<T: Float> Polynomial<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero polynomial with `order_count` coefficients (degree + 1).
    pub fn new(order_count: usize) -> Result<Self, PolyfitError> {
        Validator::validate_order(order_count)?;
        Ok(Self {
            coefficients: vec![T::zero(); order_count],
            buffer: FittingBuffer::new(order_count),
        })
    }

    /// Create a zero polynomial of the given degree.
    pub fn with_degree(degree: usize) -> Result<Self, PolyfitError> {
        Self::new(degree + 1)
    }

    /// Create a polynomial from coefficients in ascending power order.
    pub fn from_coefficients(coefficients: Vec<T>) -> Result<Self, PolyfitError> {
        Validator::validate_order(coefficients.len())?;
        let buffer = FittingBuffer::new(coefficients.len());
        Ok(Self {
            coefficients,
            buffer,
        })
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the coefficients to samples `(x, y)` by least squares.
    ///
    /// # Errors
    ///
    /// * [`PolyfitError::MismatchedInputs`] if `x` and `y` differ in length.
    /// * [`PolyfitError::InvalidNumericValue`] if a sample is NaN or infinite.
    /// * [`PolyfitError::SingularSystem`] if the samples cannot determine
    ///   every coefficient (e.g. fewer distinct `x` values than coefficients).
    ///
    /// On error the previous coefficients are kept.
    pub fn fit(&mut self, x: &[T], y: &[T]) -> Result<(), PolyfitError> {
        FitExecutor::run(x, y, &mut self.buffer, &mut self.coefficients)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of the polynomial at `x` (Horner's method).
    #[inline]
    pub fn value(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    /// Values of the polynomial at each point of `xs`.
    pub fn values(&self, xs: &[T]) -> Vec<T> {
        horner_all(&self.coefficients, xs)
    }

    /// Mean squared error against `(x, y)` over the `M - N` residual degrees
    /// of freedom; zero when there are no more samples than coefficients.
    pub fn mse(&self, x: &[T], y: &[T]) -> Result<T, PolyfitError> {
        Validator::validate_lengths(x, y)?;
        Ok(diagnostics::mean_squared_error(&self.coefficients, x, y))
    }

    /// Root of [`mse`](Self::mse).
    pub fn rmse(&self, x: &[T], y: &[T]) -> Result<T, PolyfitError> {
        self.mse(x, y).map(Float::sqrt)
    }

    /// Residuals `y_i - p(x_i)`.
    pub fn residuals(&self, x: &[T], y: &[T]) -> Result<Vec<T>, PolyfitError> {
        Validator::validate_lengths(x, y)?;
        Ok(diagnostics::residuals(&self.coefficients, x, y))
    }

    /// Full fit-quality summary against `(x, y)`.
    pub fn diagnostics(&self, x: &[T], y: &[T]) -> Result<Diagnostics<T>, PolyfitError> {
        Validator::validate_lengths(x, y)?;
        Ok(Diagnostics::compute(&self.coefficients, x, y))
    }
}

impl<T> Polynomial<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coefficients (degree + 1).
    #[inline]
    pub fn order_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of coefficients; same as [`order_count`](Self::order_count).
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always `false`: a polynomial has at least one coefficient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree of the polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients in ascending power order.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Consume the polynomial, returning its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coefficients[i]
    }
}

impl<T> IndexMut<usize> for Polynomial<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coefficients[i]
    }
}

impl<T> AsRef<[T]> for Polynomial<T> {
    fn as_ref(&self) -> &[T] {
        &self.coefficients
    }
}

impl<T> From<Polynomial<T>> for Vec<T> {
    fn from(p: Polynomial<T>) -> Self {
        p.coefficients
    }
}

/// Coefficients separated by spaces, lowest power first.
impl<T: Display> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in &self.coefficients {
            write!(f, "{c} ")?;
        }
        Ok(())
    }
}
