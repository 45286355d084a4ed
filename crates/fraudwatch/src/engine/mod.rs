//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer drives the computation: it validates preconditions, slides the
//! histogram window across the sequence, applies the notification rule, and
//! packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sliding window driver.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for notification runs.
pub mod output;
