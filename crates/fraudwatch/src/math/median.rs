//! Median of a window stored as a frequency histogram.
//!
//! ## Purpose
//!
//! This module finds the median of the multiset described by a [`Histogram`]
//! without materialising or sorting it. The cost is one pass over the value
//! domain, O(V), independent of the window length.
//!
//! ## Key concepts
//!
//! * **Rank walk**: Buckets are visited in ascending value order while a
//!   running count tracks how many window values are `<=` the current bucket.
//! * **Odd window** (`d = 2k + 1`): the median is the value at 0-based rank `k`,
//!   i.e. the first bucket where the running count exceeds `k`.
//! * **Even window** (`d = 2k`): the median is the mean of ranks `k - 1` and `k`.
//!   Rank `k - 1` is the first bucket where the running count reaches `k`,
//!   rank `k` the first where it exceeds `k`.
//! * **Duplicates**: Equal values share a bucket, so ties need no special case.
//!
//! ## Invariants
//!
//! * The histogram total must equal the window length; otherwise the median is
//!   undefined and an `InvariantViolation` is returned.
//!
//! ## Non-goals
//!
//! * This module does not compute medians of unbounded or floating-point data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::domain::to_float;
use crate::primitives::errors::FraudError;
use crate::primitives::histogram::Histogram;

/// Median of the `window` values counted by `hist`.
pub fn histogram_median<T: Float>(hist: &Histogram, window: usize) -> Result<T, FraudError> {
    if window == 0 {
        return Err(FraudError::InvariantViolation(String::from(
            "median of an empty window",
        )));
    }
    if hist.total() != window {
        return Err(FraudError::InvariantViolation(format!(
            "histogram holds {} values but the window length is {window}",
            hist.total()
        )));
    }
    debug_assert_eq!(
        hist.counts().iter().sum::<usize>(),
        window,
        "histogram_median: bucket sum disagrees with cached total"
    );

    let mid = window / 2;
    let mut count_left = 0usize;

    if !window.is_multiple_of(2) {
        for (value, &count) in hist.counts().iter().enumerate() {
            count_left += count;
            if count_left > mid {
                return to_float(value);
            }
        }
    } else {
        let mut lower = None;
        for (value, &count) in hist.counts().iter().enumerate() {
            count_left += count;
            if lower.is_none() && count_left >= mid {
                lower = Some(value);
            }
            if count_left > mid {
                let lower: T = to_float(lower.unwrap_or(value))?;
                let upper: T = to_float(value)?;
                return Ok((lower + upper) / (T::one() + T::one()));
            }
        }
    }

    // Unreachable while the total matches the window.
    Err(FraudError::InvariantViolation(format!(
        "median rank {mid} not reached in a window of {window}"
    )))
}
