//! High-level API for notification counting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the notification parameters and a choice of execution
//! adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters
//!   except the window length.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over the `Float` type of reported medians.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NotifierBuilder`] via `Notifier::new()`.
//! 2. Chain configuration methods (`.window()`, `.max_value()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchNotifierBuilder;
use crate::adapters::online::OnlineNotifierBuilder;
use crate::engine::executor::{NotificationConfig, NotificationExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::batch::BatchNotifier;
pub use crate::adapters::online::{DayOutcome, OnlineNotifier};
pub use crate::engine::output::NotificationReport;
pub use crate::math::median::histogram_median;
pub use crate::primitives::domain::{DEFAULT_MAX_VALUE, DEFAULT_THRESHOLD_FACTOR};
pub use crate::primitives::errors::FraudError;
pub use crate::primitives::histogram::Histogram;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Count days whose expenditure is at least twice the median of the
/// preceding `window` days, with values bounded by [`DEFAULT_MAX_VALUE`].
///
/// ```rust
/// use fraudwatch::count_notifications;
///
/// let spending = [2, 3, 4, 2, 3, 6, 8, 4, 5];
/// assert_eq!(count_notifications(&spending, 5)?, 2);
/// # Ok::<(), fraudwatch::prelude::FraudError>(())
/// ```
pub fn count_notifications(values: &[u32], window: usize) -> Result<usize, FraudError> {
    let config = NotificationConfig::with_window(window);
    Validator::validate_sequence(values, config.max_value)?;
    NotificationExecutor::run::<f64>(values, &config).map(|out| out.notifications)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring notification parameters and execution modes.
#[derive(Debug, Clone)]
pub struct NotifierBuilder<T> {
    /// Trailing window length `d`.
    pub window: Option<usize>,

    /// Inclusive upper bound of expenditure values.
    pub max_value: Option<u32>,

    /// Multiplier applied to the trailing median.
    pub threshold_factor: Option<f64>,

    /// Return indices of notifying days (Batch only).
    pub return_flagged_days: Option<bool>,

    /// Return the trailing median of each evaluated day (Batch only).
    pub return_medians: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _float: PhantomData<T>,
}

impl<T: Float> Default for NotifierBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NotifierBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: NotifierAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            max_value: None,
            threshold_factor: None,
            return_flagged_days: None,
            return_medians: None,
            duplicate_param: None,
            _float: PhantomData,
        }
    }

    /// Set the trailing window length `d`.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the inclusive upper bound of expenditure values (default 200).
    pub fn max_value(mut self, max_value: u32) -> Self {
        if self.max_value.is_some() {
            self.duplicate_param = Some("max_value");
        }
        self.max_value = Some(max_value);
        self
    }

    /// Set the multiplier applied to the trailing median (default 2).
    pub fn threshold_factor(mut self, factor: f64) -> Self {
        if self.threshold_factor.is_some() {
            self.duplicate_param = Some("threshold_factor");
        }
        self.threshold_factor = Some(factor);
        self
    }

    /// Include the indices of notifying days in the report.
    pub fn return_flagged_days(mut self) -> Self {
        self.return_flagged_days = Some(true);
        self
    }

    /// Include the trailing median of every evaluated day in the report.
    pub fn return_medians(mut self) -> Self {
        self.return_medians = Some(true);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait NotifierAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`NotifierBuilder`] into a specialized execution builder.
    fn convert(builder: NotifierBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> NotifierAdapter<T> for Batch {
    type Output = BatchNotifierBuilder<T>;

    fn convert(builder: NotifierBuilder<T>) -> Self::Output {
        let mut result = BatchNotifierBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(max_value) = builder.max_value {
            result.max_value = max_value;
        }
        if let Some(factor) = builder.threshold_factor {
            result.threshold_factor = factor;
        }
        if let Some(rf) = builder.return_flagged_days {
            result.return_flagged_days = rf;
        }
        if let Some(rm) = builder.return_medians {
            result.return_medians = rm;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental day-by-day processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> NotifierAdapter<T> for Online {
    type Output = OnlineNotifierBuilder<T>;

    fn convert(builder: NotifierBuilder<T>) -> Self::Output {
        let mut result = OnlineNotifierBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(max_value) = builder.max_value {
            result.max_value = max_value;
        }
        if let Some(factor) = builder.threshold_factor {
            result.threshold_factor = factor;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
