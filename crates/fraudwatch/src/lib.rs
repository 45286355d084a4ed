//! # fraudwatch — Fraudulent Activity Notifications for Rust
//!
//! Counts the days on which a client's spending is at least twice the median
//! of their spending over a trailing window of `d` days.
//!
//! ## How it works
//!
//! Daily expenditures are small bounded integers (`0..=200` by default). The
//! trailing window is kept as a frequency histogram over that domain, so each
//! slide is one decrement plus one increment and each median is a single walk
//! over the buckets: O(V) per day regardless of the window length, and
//! O(N·V) for the whole sequence.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fraudwatch::prelude::*;
//!
//! let spending = vec![2, 3, 4, 2, 3, 6, 8, 4, 5];
//!
//! let notifications = count_notifications(&spending, 5)?;
//! assert_eq!(notifications, 2);
//! # Result::<(), FraudError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use fraudwatch::prelude::*;
//!
//! let spending = vec![10, 20, 30, 40];
//!
//! let notifier = Notifier::<f64>::new()
//!     .window(1)              // Compare each day with the day before
//!     .max_value(200)         // Expenditures lie in [0, 200]
//!     .threshold_factor(2.0)  // Notify at >= 2 x median
//!     .return_flagged_days()  // Keep the notifying day indices
//!     .return_medians()       // Keep every trailing median
//!     .adapter(Batch)
//!     .build()?;
//!
//! let report = notifier.run(&spending)?;
//! assert_eq!(report.notifications, 1);
//! assert_eq!(report.flagged_days, Some(vec![1]));
//! println!("{}", report);
//! # Result::<(), FraudError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Days: 4
//!   Trailing window: 1
//!   Threshold factor: 2
//!   Days evaluated: 3
//!   Notifications: 1
//!   Flagged days: 1
//!
//!      Day       Median
//!   -------------------
//!        1        10.00
//!        2        20.00
//!        3        30.00
//! ```
//!
//! ### Day-by-Day
//!
//! ```rust
//! use fraudwatch::prelude::*;
//!
//! let mut notifier = Notifier::<f64>::new().window(2).adapter(Online).build()?;
//!
//! assert!(notifier.add_day(10)?.is_none()); // warming up
//! assert!(notifier.add_day(20)?.is_none());
//!
//! let outcome = notifier.add_day(30)?.expect("window is full");
//! assert_eq!(outcome.median, 15.0);
//! assert!(outcome.notified);
//! # Result::<(), FraudError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<_, FraudError>`. Errors are contract
//! breaches (empty input, window outside `[1, N]`, value outside the domain,
//! corrupted histogram bookkeeping) and are reported before any silently
//! wrong count could be produced.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! fraudwatch = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - histogram median.
mod math;

// Layer 3: Engine - sliding window driver and validation.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

pub use api::count_notifications;

// Standard fraudwatch prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        BatchNotifier, DayOutcome, FraudError, Histogram, NotificationReport, NotifierBuilder as Notifier,
        OnlineNotifier, count_notifications, histogram_median,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for integration tests and
// benchmarks. It is not part of the stable API.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
