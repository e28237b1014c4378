//! Layer 1: Math
//!
//! # Purpose
//!
//! This layer provides the numerical kernels behind a least-squares fit:
//! - Moment matrix assembly (normal equations)
//! - Scaled-partial-pivoting LU decomposition and back substitution
//!
//! These are reusable building blocks with no knowledge of the public API.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Math ← You are here
//!   ↓
//! Layer 0: Primitives
//! ```

/// Normal-equations (moment matrix) assembly.
pub mod moments;

/// Pivoted LU solver.
pub mod linalg;
