//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and shared types used throughout
//! the crate: the bounded-value histogram, domain constants, and the error
//! type. It has zero internal dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Bounded-value frequency histogram.
pub mod histogram;

/// Value domain constants and numeric conversions.
pub mod domain;

/// Shared error types.
pub mod errors;
