//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the order statistic used by the notification rule:
//! the median of a window represented as a histogram.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Histogram median finder.
pub mod median;
