//! Sliding window driver for notification counting.
//!
//! ## Purpose
//!
//! This module walks an expenditure sequence with a trailing window of fixed
//! length `d`, keeping the window as a histogram that is updated in place as
//! it slides. For every day after the first window it asks the median finder
//! for the trailing median and counts a notification when the day's value is
//! at least `factor × median`.
//!
//! ## Design notes
//!
//! * **Incremental**: One decrement and one increment per step; the window is
//!   never rebuilt.
//! * **Compare before slide**: The day under evaluation is never part of the
//!   window it is compared against.
//! * **Cost**: O(N·V) time, O(V) auxiliary space (plus optional outputs).
//!
//! ## Invariants
//!
//! * At every comparison the histogram holds exactly the `d` values at
//!   positions `[i - d, i - 1]`.
//! * The result never exceeds `N - d`.
//!
//! ## Non-goals
//!
//! * This module does not perform I/O.
//! * This module does not run in parallel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::median::histogram_median;
use crate::primitives::domain::{DEFAULT_MAX_VALUE, DEFAULT_THRESHOLD_FACTOR, from_f64, to_float};
use crate::primitives::errors::FraudError;
use crate::primitives::histogram::Histogram;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters for one run of the sliding window driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationConfig {
    /// Trailing window length `d`.
    pub window: usize,

    /// Inclusive upper bound of expenditure values.
    pub max_value: u32,

    /// Multiplier applied to the trailing median.
    pub threshold_factor: f64,

    /// Record the indices of notifying days.
    pub return_flagged_days: bool,

    /// Record the trailing median of every evaluated day.
    pub return_medians: bool,
}

impl NotificationConfig {
    /// Configuration with default domain and factor for the given window.
    pub fn with_window(window: usize) -> Self {
        Self {
            window,
            max_value: DEFAULT_MAX_VALUE,
            threshold_factor: DEFAULT_THRESHOLD_FACTOR,
            return_flagged_days: false,
            return_medians: false,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Raw output of the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Number of notifying days.
    pub notifications: usize,

    /// 0-based indices of notifying days.
    pub flagged_days: Option<Vec<usize>>,

    /// Trailing median per evaluated day (`N - d` entries).
    pub medians: Option<Vec<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Sliding window driver.
pub struct NotificationExecutor;

impl NotificationExecutor {
    /// Count notifications in `values` under `config`.
    pub fn run<T: Float>(
        values: &[u32],
        config: &NotificationConfig,
    ) -> Result<ExecutorOutput<T>, FraudError> {
        let n = values.len();
        let d = config.window;
        Validator::validate_window(d, n)?;
        Validator::validate_max_value(config.max_value)?;
        Validator::validate_factor(config.threshold_factor)?;
        let factor: T = from_f64(config.threshold_factor)?;

        let mut hist = Histogram::from_values(&values[..d], config.max_value)?;

        let evaluated = n - d;
        let mut flagged = config
            .return_flagged_days
            .then(|| Vec::with_capacity(evaluated / 4));
        let mut medians = config.return_medians.then(|| Vec::with_capacity(evaluated));
        let mut notifications = 0usize;

        for i in d..n {
            let value = values[i];
            Validator::validate_value(value, i, config.max_value)?;

            let median: T = histogram_median(&hist, d)?;
            if Self::is_notification(value, median, factor)? {
                notifications += 1;
                if let Some(days) = flagged.as_mut() {
                    days.push(i);
                }
            }
            if let Some(m) = medians.as_mut() {
                m.push(median);
            }

            hist.slide(values[i - d], value)?;
            debug_assert_eq!(hist.total(), d, "run: window length drifted");
        }

        Ok(ExecutorOutput {
            notifications,
            flagged_days: flagged,
            medians,
        })
    }

    /// The notification rule: `value >= factor * median`.
    #[inline]
    pub fn is_notification<T: Float>(value: u32, median: T, factor: T) -> Result<bool, FraudError> {
        let value: T = to_float(value as usize)?;
        Ok(value >= factor * median)
    }
}
