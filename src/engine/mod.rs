//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates sample data and drives a fit through the math layer:
//! assemble the moment matrix, solve it, publish the coefficients.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Math
//!   ↓
//! Layer 0: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Fit orchestration.
pub mod executor;
