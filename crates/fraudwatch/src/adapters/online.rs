//! Online adapter for day-by-day notification counting.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. Days are
//! fed one at a time; once the trailing window is full every new day is
//! checked against the median of the previous `d` days and then slid into the
//! window.
//!
//! ## Design notes
//!
//! * **Storage**: A `VecDeque` remembers window order so the expiring day is
//!   known; the histogram answers median queries.
//! * **Warm-up**: Returns `None` until `d` days have been seen.
//! * **Equivalence**: Feeding a sequence day by day yields the batch count.
//!
//! ## Invariants
//!
//! * The deque and the histogram always describe the same multiset.
//! * The window never holds more than `d` days.
//!
//! ## Non-goals
//!
//! * This adapter does not return per-run reports (use the batch adapter).
//! * This adapter does not persist state across processes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, string::String};
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::NotificationExecutor;
use crate::engine::validator::Validator;
use crate::math::median::histogram_median;
use crate::primitives::domain::{DEFAULT_MAX_VALUE, DEFAULT_THRESHOLD_FACTOR, from_f64};
use crate::primitives::errors::FraudError;
use crate::primitives::histogram::Histogram;

// ============================================================================
// Online Notifier Builder
// ============================================================================

/// Builder for the online notification counter.
#[derive(Debug, Clone)]
pub struct OnlineNotifierBuilder<T> {
    /// Trailing window length (0 = unset)
    pub window: usize,

    /// Inclusive upper bound of expenditure values
    pub max_value: u32,

    /// Multiplier applied to the trailing median
    pub threshold_factor: f64,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _float: PhantomData<T>,
}

impl<T: Float> Default for OnlineNotifierBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineNotifierBuilder<T> {
    /// Upper bound on the window storage reserved up front.
    const MAX_PREALLOCATED_DAYS: usize = 1 << 16;

    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            window: 0,
            max_value: DEFAULT_MAX_VALUE,
            threshold_factor: DEFAULT_THRESHOLD_FACTOR,
            duplicate_param: None,
            _float: PhantomData,
        }
    }

    /// Set the trailing window length.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the inclusive upper bound of expenditure values.
    pub fn max_value(mut self, max_value: u32) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the multiplier applied to the trailing median.
    pub fn threshold_factor(mut self, factor: f64) -> Self {
        self.threshold_factor = factor;
        self
    }

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineNotifier<T>, FraudError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window_length(self.window)?;
        Validator::validate_max_value(self.max_value)?;
        Validator::validate_factor(self.threshold_factor)?;

        Ok(OnlineNotifier {
            window: self.window,
            max_value: self.max_value,
            factor: from_f64(self.threshold_factor)?,
            days: VecDeque::with_capacity(self.window.min(Self::MAX_PREALLOCATED_DAYS)),
            hist: Histogram::new(self.max_value),
            days_seen: 0,
            notifications: 0,
        })
    }
}

// ============================================================================
// Online Output
// ============================================================================

/// Evaluation of a single day against its trailing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayOutcome<T> {
    /// 0-based position of the day in the stream.
    pub day: usize,

    /// The day's expenditure.
    pub value: u32,

    /// Median of the preceding window.
    pub median: T,

    /// Whether the day triggered a notification.
    pub notified: bool,
}

// ============================================================================
// Online Notifier Processor
// ============================================================================

/// Online notification counter for day-by-day input.
#[derive(Debug, Clone)]
pub struct OnlineNotifier<T> {
    window: usize,
    max_value: u32,
    factor: T,
    days: VecDeque<u32>,
    hist: Histogram,
    days_seen: usize,
    notifications: usize,
}

impl<T: Float> OnlineNotifier<T> {
    /// Add the next day's expenditure.
    ///
    /// Returns `None` while the first `window` days are being collected.
    pub fn add_day(&mut self, value: u32) -> Result<Option<DayOutcome<T>>, FraudError> {
        let day = self.days_seen;
        Validator::validate_value(value, day, self.max_value)?;

        // Warm-up: fill the first window
        if self.days.len() < self.window {
            self.hist.increment(value)?;
            self.days.push_back(value);
            self.days_seen += 1;
            return Ok(None);
        }

        let median: T = histogram_median(&self.hist, self.window)?;
        let notified = NotificationExecutor::is_notification(value, median, self.factor)?;

        let outgoing = self.days.pop_front().ok_or_else(|| {
            FraudError::InvariantViolation(String::from("full window has no oldest day"))
        })?;
        self.hist.slide(outgoing, value)?;
        self.days.push_back(value);
        debug_assert_eq!(self.hist.total(), self.days.len());

        self.days_seen += 1;
        if notified {
            self.notifications += 1;
        }

        Ok(Some(DayOutcome {
            day,
            value,
            median,
            notified,
        }))
    }

    /// Add several days; returns how many of them notified.
    pub fn add_days(&mut self, values: &[u32]) -> Result<usize, FraudError> {
        let mut notified = 0;
        for &value in values {
            if self.add_day(value)?.is_some_and(|outcome| outcome.notified) {
                notified += 1;
            }
        }
        Ok(notified)
    }

    /// Median of the current window, once it is full.
    pub fn current_median(&self) -> Result<Option<T>, FraudError> {
        if !self.is_primed() {
            return Ok(None);
        }
        histogram_median(&self.hist, self.window).map(Some)
    }

    /// Whether the trailing window is full.
    pub fn is_primed(&self) -> bool {
        self.days.len() == self.window
    }

    /// Number of days currently held in the window.
    pub fn window_fill(&self) -> usize {
        self.days.len()
    }

    /// Configured window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Total days fed so far.
    pub fn days_seen(&self) -> usize {
        self.days_seen
    }

    /// Notifications raised so far.
    pub fn notifications(&self) -> usize {
        self.notifications
    }

    /// Histogram of the current window.
    pub fn histogram(&self) -> &Histogram {
        &self.hist
    }

    /// Forget all days and notifications.
    pub fn reset(&mut self) {
        self.days.clear();
        self.hist.clear();
        self.days_seen = 0;
        self.notifications = 0;
    }
}
