//! Batch adapter for whole-sequence notification counting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete
//! expenditure sequence held in memory, validates it, and runs the sliding
//! window driver once.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sequence in a single pass.
//! * **Validation**: Checks the whole sequence before any counting starts.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over the `Float` type of reported medians.
//!
//! ## Invariants
//!
//! * `1 <= window <= values.len()`.
//! * Every value lies in `[0, max_value]`.
//!
//! ## Non-goals
//!
//! * This adapter does not handle day-by-day input (use the online adapter).

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{NotificationConfig, NotificationExecutor};
use crate::engine::output::NotificationReport;
use crate::engine::validator::Validator;
use crate::primitives::domain::{DEFAULT_MAX_VALUE, DEFAULT_THRESHOLD_FACTOR};
use crate::primitives::errors::FraudError;

// ============================================================================
// Batch Notifier Builder
// ============================================================================

/// Builder for the batch notification counter.
#[derive(Debug, Clone)]
pub struct BatchNotifierBuilder<T> {
    /// Trailing window length (0 = unset)
    pub window: usize,

    /// Inclusive upper bound of expenditure values
    pub max_value: u32,

    /// Multiplier applied to the trailing median
    pub threshold_factor: f64,

    /// Whether to return the indices of notifying days
    pub return_flagged_days: bool,

    /// Whether to return the trailing median of every evaluated day
    pub return_medians: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _float: PhantomData<T>,
}

impl<T: Float> Default for BatchNotifierBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchNotifierBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            window: 0,
            max_value: DEFAULT_MAX_VALUE,
            threshold_factor: DEFAULT_THRESHOLD_FACTOR,
            return_flagged_days: false,
            return_medians: false,
            duplicate_param: None,
            _float: PhantomData,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

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

    /// Enable returning the indices of notifying days.
    pub fn return_flagged_days(mut self, enabled: bool) -> Self {
        self.return_flagged_days = enabled;
        self
    }

    /// Enable returning the trailing median of every evaluated day.
    pub fn return_medians(mut self, enabled: bool) -> Self {
        self.return_medians = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchNotifier<T>, FraudError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window_length(self.window)?;
        Validator::validate_max_value(self.max_value)?;
        Validator::validate_factor(self.threshold_factor)?;

        Ok(BatchNotifier {
            config: NotificationConfig {
                window: self.window,
                max_value: self.max_value,
                threshold_factor: self.threshold_factor,
                return_flagged_days: self.return_flagged_days,
                return_medians: self.return_medians,
            },
            _float: PhantomData,
        })
    }
}

// ============================================================================
// Batch Notifier Processor
// ============================================================================

/// Batch notification counter.
#[derive(Debug, Clone)]
pub struct BatchNotifier<T> {
    config: NotificationConfig,
    _float: PhantomData<T>,
}

impl<T: Float> BatchNotifier<T> {
    /// Count notifications over a complete expenditure sequence.
    pub fn run(&self, values: &[u32]) -> Result<NotificationReport<T>, FraudError> {
        Validator::validate_sequence(values, self.config.max_value)?;
        Validator::validate_window(self.config.window, values.len())?;

        let output = NotificationExecutor::run::<T>(values, &self.config)?;

        Ok(NotificationReport {
            notifications: output.notifications,
            days: values.len(),
            window: self.config.window,
            threshold_factor: self.config.threshold_factor,
            flagged_days: output.flagged_days,
            medians: output.medians,
        })
    }

    /// The configuration this processor runs with.
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }
}
