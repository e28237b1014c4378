//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer scores a fitted polynomial against data: residuals, residual
//! sum of squares, and the mean squared error over the residual degrees of
//! freedom.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Math
//!   ↓
//! Layer 0: Primitives
//! ```

/// Fit quality metrics.
pub mod diagnostics;
