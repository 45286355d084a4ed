//! Output types for notification runs.
//!
//! ## Purpose
//!
//! This module defines `NotificationReport`, the result of a batch run: the
//! notification count plus the optional per-day details requested through
//! the builder.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Per-day details use `Option<Vec<_>>` and are only
//!   populated when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `notifications <= days - window`.
//! * `flagged_days`, when present, has `notifications` ascending entries, each
//!   in `[window, days)`.
//! * `medians`, when present, has `days - window` entries.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of counting notifications over a whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationReport<T> {
    /// Number of days that triggered a notification.
    pub notifications: usize,

    /// Length of the input sequence.
    pub days: usize,

    /// Trailing window length used.
    pub window: usize,

    /// Multiplier applied to the trailing median.
    pub threshold_factor: f64,

    /// 0-based indices of the notifying days.
    pub flagged_days: Option<Vec<usize>>,

    /// Trailing median for each evaluated day, starting at day `window`.
    pub medians: Option<Vec<T>>,
}

impl<T: Float> NotificationReport<T> {
    /// Number of days compared against a full trailing window.
    pub fn days_evaluated(&self) -> usize {
        self.days - self.window
    }

    /// Fraction of evaluated days that notified (zero when none were evaluated).
    pub fn notification_rate(&self) -> f64 {
        match self.days_evaluated() {
            0 => 0.0,
            evaluated => self.notifications as f64 / evaluated as f64,
        }
    }

    /// Check if flagged day indices were recorded.
    pub fn has_flagged_days(&self) -> bool {
        self.flagged_days.is_some()
    }

    /// Check if trailing medians were recorded.
    pub fn has_medians(&self) -> bool {
        self.medians.is_some()
    }

    /// Trailing median used for day `day` (0-based), if recorded and evaluated.
    pub fn median_for_day(&self, day: usize) -> Option<T> {
        let offset = day.checked_sub(self.window)?;
        self.medians.as_ref()?.get(offset).copied()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for NotificationReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Days: {}", self.days)?;
        writeln!(f, "  Trailing window: {}", self.window)?;
        writeln!(f, "  Threshold factor: {}", self.threshold_factor)?;
        writeln!(f, "  Days evaluated: {}", self.days_evaluated())?;
        writeln!(f, "  Notifications: {}", self.notifications)?;

        if let Some(days) = &self.flagged_days {
            write!(f, "  Flagged days:")?;
            for day in days {
                write!(f, " {day}")?;
            }
            writeln!(f)?;
        }

        if let Some(medians) = &self.medians {
            writeln!(f)?;
            writeln!(f, "{:>8} {:>12}", "Day", "Median")?;
            writeln!(f, "  {}", "-".repeat(19))?;
            for (offset, median) in medians.iter().enumerate() {
                writeln!(f, "{:>8} {:>12.2}", self.window + offset, median)?;
            }
        }

        Ok(())
    }
}
