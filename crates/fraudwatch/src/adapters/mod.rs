//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer to
//! different ways of receiving data:
//!
//! - **Batch**: A complete sequence held in memory
//! - **Online**: One day at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for complete sequences.
pub mod batch;

/// Online adapter for day-by-day input.
pub mod online;
