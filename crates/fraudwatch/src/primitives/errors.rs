//! Error types for notification counting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while counting
//! fraud notifications: broken caller preconditions, broken histogram
//! invariants, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index, value, bound).
//! * **Deferred**: Builder errors are stored and reported at `build()` time.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Preconditions**: Empty sequence, window outside `[1, N]`, value outside `[0, V]`.
//! 2. **Invariants**: Histogram total must equal the window length at every median query.
//! 3. **Configuration**: Invalid domain bound or threshold factor, duplicate parameters.
//!
//! ## Invariants
//!
//! * Every variant is a contract breach; none is recovered from internally.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not parse or report textual user input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::domain::MAX_SUPPORTED_VALUE;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for notification counting.
#[derive(Debug, Clone, PartialEq)]
pub enum FraudError {
    /// The expenditure sequence is empty.
    EmptyInput,

    /// Window length must be at least 1 and, for a whole sequence, at most its length.
    InvalidWindow {
        /// Requested window length.
        window: usize,
        /// Length of the expenditure sequence, when one is known.
        len: Option<usize>,
    },

    /// An expenditure lies outside the bounded domain `[0, max]`.
    ValueOutOfRange {
        /// Position of the offending day (0-based).
        index: usize,
        /// The offending value.
        value: u32,
        /// Inclusive upper bound of the domain.
        max: u32,
    },

    /// Domain upper bound is too large for a histogram.
    InvalidMaxValue(u32),

    /// Threshold factor must be finite and non-negative.
    InvalidFactor(f64),

    /// Histogram/window bookkeeping is inconsistent.
    InvariantViolation(String),

    /// A numeric conversion failed.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl FraudError {
    /// Whether this error reports corrupted histogram bookkeeping rather
    /// than a rejected input or configuration.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FraudError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Expenditure sequence is empty"),
            Self::InvalidWindow {
                window,
                len: Some(len),
            } => {
                write!(f, "Invalid window: {window} (must be between 1 and {len})")
            }
            Self::InvalidWindow { window, len: None } => {
                write!(f, "Invalid window: {window} (must be at least 1)")
            }
            Self::ValueOutOfRange { index, value, max } => {
                write!(
                    f,
                    "Value out of range at day {index}: {value} (must be between 0 and {max})"
                )
            }
            Self::InvalidMaxValue(max) => {
                write!(f, "Invalid max_value: {max} (must be at most {MAX_SUPPORTED_VALUE})")
            }
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid threshold factor: {factor} (must be >= 0 and finite)")
            }
            Self::InvariantViolation(msg) => write!(f, "Invariant violation: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FraudError {}
