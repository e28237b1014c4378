//! Layer 0: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the reusable working storage used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 1: Math
//!   ↓
//! Layer 0: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Buffer management.
pub mod buffer;
