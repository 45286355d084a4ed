//! Precondition checks for notification counting.
//!
//! ## Purpose
//!
//! This module validates builder parameters and input sequences before the
//! sliding window driver runs, so that a contract breach surfaces as an error
//! instead of a silently wrong count.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **No clamping**: Out-of-domain values are reported, never truncated.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not parse textual input.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::domain::MAX_SUPPORTED_VALUE;
use crate::primitives::errors::FraudError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for notification parameters and input data.
///
/// All methods return `Result<(), FraudError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a complete expenditure sequence against the domain bound.
    pub fn validate_sequence(values: &[u32], max_value: u32) -> Result<(), FraudError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(FraudError::EmptyInput);
        }

        // Check 2: Every value inside [0, max_value]
        for (index, &value) in values.iter().enumerate() {
            Self::validate_value(value, index, max_value)?;
        }

        Ok(())
    }

    /// Validate a single expenditure value.
    #[inline]
    pub fn validate_value(value: u32, index: usize, max_value: u32) -> Result<(), FraudError> {
        if value > max_value {
            return Err(FraudError::ValueOutOfRange {
                index,
                value,
                max: max_value,
            });
        }
        Ok(())
    }

    /// Validate a window length against the sequence length (`1 <= window <= len`).
    pub fn validate_window(window: usize, len: usize) -> Result<(), FraudError> {
        if window == 0 || window > len {
            return Err(FraudError::InvalidWindow {
                window,
                len: Some(len),
            });
        }
        Ok(())
    }

    /// Validate a window length with no sequence in view (`window >= 1`).
    pub fn validate_window_length(window: usize) -> Result<(), FraudError> {
        if window == 0 {
            return Err(FraudError::InvalidWindow { window, len: None });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the inclusive domain bound used to size the histogram.
    pub fn validate_max_value(max_value: u32) -> Result<(), FraudError> {
        if max_value > MAX_SUPPORTED_VALUE {
            return Err(FraudError::InvalidMaxValue(max_value));
        }
        Ok(())
    }

    /// Validate the multiplier applied to the trailing median.
    pub fn validate_factor(factor: f64) -> Result<(), FraudError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(FraudError::InvalidFactor(factor));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FraudError> {
        if let Some(param) = duplicate_param {
            return Err(FraudError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
