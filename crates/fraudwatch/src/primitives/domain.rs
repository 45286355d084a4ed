//! Bounded value domain and numeric conversions.
//!
//! Expenditures are small non-negative integers drawn from `[0, V]`. The
//! histogram is sized by `V`, so the bound is capped to keep allocation sane.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FraudError;

/// Default inclusive upper bound of an expenditure value.
pub const DEFAULT_MAX_VALUE: u32 = 200;

/// Largest domain bound accepted for a histogram.
pub const MAX_SUPPORTED_VALUE: u32 = 1_000_000;

/// Default multiplier applied to the trailing median.
pub const DEFAULT_THRESHOLD_FACTOR: f64 = 2.0;

/// Convert a count or bucket value into the float type used for medians.
#[inline]
pub fn to_float<T: Float>(value: usize) -> Result<T, FraudError> {
    T::from(value)
        .ok_or_else(|| FraudError::InvalidNumericValue(format!("cannot represent {value}")))
}

/// Convert an `f64` configuration value into the median float type.
#[inline]
pub fn from_f64<T: Float>(value: f64) -> Result<T, FraudError> {
    T::from(value)
        .ok_or_else(|| FraudError::InvalidNumericValue(format!("cannot represent {value}")))
}
