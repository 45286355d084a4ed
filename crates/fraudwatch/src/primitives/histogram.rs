//! Frequency histogram over a bounded integer domain.
//!
//! ## Purpose
//!
//! This module provides the counting structure that represents the trailing
//! window. Instead of storing the window's values in order, it stores how many
//! times each value in `[0, V]` occurs, which makes the median an O(V) walk
//! regardless of the window length.
//!
//! ## Design notes
//!
//! * **Fixed size**: The bucket array is allocated once with `V + 1` slots.
//! * **Cached total**: The sum of all buckets is tracked so the window-length
//!   invariant can be checked in O(1).
//! * **Atomic slide**: `slide` validates both values before touching any bucket.
//!
//! ## Invariants
//!
//! * `total()` equals the sum of all buckets.
//! * No bucket is ever decremented below zero.
//! * Every counted value lies in `[0, max_value()]`.
//!
//! ## Non-goals
//!
//! * This module does not remember insertion order (the driver does).
//! * This module does not support values outside the bounded domain.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FraudError;

// ============================================================================
// Histogram
// ============================================================================

/// Occurrence counts for every value in `[0, max_value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<usize>,
    total: usize,
}

impl Histogram {
    /// Create an empty histogram over `[0, max_value]`.
    pub fn new(max_value: u32) -> Self {
        let buckets = (max_value as usize).saturating_add(1);
        Self {
            counts: vec![0; buckets],
            total: 0,
        }
    }

    /// Build a histogram holding exactly `values`.
    pub fn from_values(values: &[u32], max_value: u32) -> Result<Self, FraudError> {
        let mut hist = Self::new(max_value);
        for (index, &value) in values.iter().enumerate() {
            if value > max_value {
                return Err(FraudError::ValueOutOfRange {
                    index,
                    value,
                    max: max_value,
                });
            }
            hist.counts[value as usize] += 1;
            hist.total += 1;
        }
        Ok(hist)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Inclusive upper bound of the domain.
    #[inline]
    pub fn max_value(&self) -> u32 {
        (self.counts.len() - 1) as u32
    }

    /// Number of buckets (`max_value + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all bucket counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no value is currently counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Count for a single value (zero outside the domain).
    #[inline]
    pub fn count(&self, value: u32) -> usize {
        self.counts.get(value as usize).copied().unwrap_or(0)
    }

    /// All bucket counts in ascending value order.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Iterate `(value, count)` over the non-empty buckets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(v, &c)| (v as u32, c))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Count one more occurrence of `value`.
    #[inline]
    pub fn increment(&mut self, value: u32) -> Result<(), FraudError> {
        self.check_domain(value)?;
        self.counts[value as usize] += 1;
        self.total += 1;
        Ok(())
    }

    /// Remove one occurrence of `value`.
    #[inline]
    pub fn decrement(&mut self, value: u32) -> Result<(), FraudError> {
        self.check_domain(value)?;
        let bucket = &mut self.counts[value as usize];
        if *bucket == 0 {
            return Err(FraudError::InvariantViolation(format!(
                "decrement of empty bucket {value}"
            )));
        }
        *bucket -= 1;
        self.total -= 1;
        Ok(())
    }

    /// Replace one occurrence of `outgoing` with `incoming`.
    ///
    /// The total is unchanged. On error the histogram is left untouched.
    #[inline]
    pub fn slide(&mut self, outgoing: u32, incoming: u32) -> Result<(), FraudError> {
        self.check_domain(incoming)?;
        self.decrement(outgoing)?;
        self.counts[incoming as usize] += 1;
        self.total += 1;
        debug_assert_eq!(
            self.total,
            self.counts.iter().sum::<usize>(),
            "slide: cached total out of sync"
        );
        Ok(())
    }

    /// Reset every bucket to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
    }

    fn check_domain(&self, value: u32) -> Result<(), FraudError> {
        if value as usize >= self.counts.len() {
            return Err(FraudError::InvariantViolation(format!(
                "value {value} outside histogram domain [0, {}]",
                self.max_value()
            )));
        }
        Ok(())
    }
}
