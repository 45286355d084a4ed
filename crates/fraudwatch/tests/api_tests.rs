//! Tests for the high-level notification API.
//!
//! These tests verify the fluent builder, adapter selection, and the
//! convenience entry point:
//! - Builder defaults and parameter propagation
//! - Duplicate parameter detection
//! - `count_notifications` behaviour on valid and invalid input
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, adapter conversion
//! 2. **Parameter Propagation** - Options reach the adapters
//! 3. **Convenience Function** - `count_notifications`

use fraudwatch::internals::api::{Batch, NotifierBuilder as Notifier, Online};
use fraudwatch::internals::primitives::domain::{DEFAULT_MAX_VALUE, DEFAULT_THRESHOLD_FACTOR};
use fraudwatch::internals::primitives::errors::FraudError;
use fraudwatch::count_notifications;

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test a fresh builder has every parameter unset.
#[test]
fn test_builder_defaults() {
    let builder = Notifier::<f64>::new();

    assert!(builder.window.is_none());
    assert!(builder.max_value.is_none());
    assert!(builder.threshold_factor.is_none());
    assert!(builder.return_flagged_days.is_none());
    assert!(builder.return_medians.is_none());
    assert!(builder.duplicate_param.is_none());
}

/// Test unset parameters fall back to the documented defaults.
#[test]
fn test_batch_builder_defaults() {
    let batch = Notifier::<f64>::new().window(3).adapter(Batch);

    assert_eq!(batch.window, 3);
    assert_eq!(batch.max_value, DEFAULT_MAX_VALUE);
    assert_eq!(batch.threshold_factor, DEFAULT_THRESHOLD_FACTOR);
    assert!(!batch.return_flagged_days);
    assert!(!batch.return_medians);
}

/// Test the last duplicated parameter is the one reported.
#[test]
fn test_duplicate_max_value() {
    let res = Notifier::<f64>::new()
        .window(3)
        .max_value(100)
        .max_value(150)
        .adapter(Batch)
        .build();

    assert_eq!(
        res.unwrap_err(),
        FraudError::DuplicateParameter {
            parameter: "max_value"
        }
    );
}

// ============================================================================
// Parameter Propagation Tests
// ============================================================================

/// Test builder options reach the batch configuration.
#[test]
fn test_batch_config_propagation() {
    let notifier = Notifier::<f64>::new()
        .window(7)
        .max_value(50)
        .threshold_factor(3.0)
        .return_flagged_days()
        .adapter(Batch)
        .build()
        .unwrap();

    let config = notifier.config();
    assert_eq!(config.window, 7);
    assert_eq!(config.max_value, 50);
    assert_eq!(config.threshold_factor, 3.0);
    assert!(config.return_flagged_days);
    assert!(!config.return_medians);
}

/// Test builder options reach the online processor.
#[test]
fn test_online_config_propagation() {
    let builder = Notifier::<f64>::new()
        .window(4)
        .max_value(10)
        .adapter(Online);

    assert_eq!(builder.window, 4);
    assert_eq!(builder.max_value, 10);

    let mut notifier = builder.build().unwrap();
    assert_eq!(notifier.window(), 4);
    assert_eq!(notifier.histogram().len(), 11);
    assert!(notifier.add_day(11).is_err(), "Custom domain is enforced");
}

/// Test the batch builder setters override converted values.
#[test]
fn test_batch_builder_setters() {
    let report = Notifier::<f64>::new()
        .adapter(Batch)
        .window(1)
        .return_flagged_days(true)
        .build()
        .unwrap()
        .run(&[1, 2, 3])
        .unwrap();

    assert_eq!(report.flagged_days, Some(vec![1]));
}

// ============================================================================
// Convenience Function Tests
// ============================================================================

/// Test the convenience function on the reference scenarios.
#[test]
fn test_count_notifications_reference() {
    assert_eq!(count_notifications(&[2, 3, 4, 2, 3, 6, 8, 4, 5], 5), Ok(2));
    assert_eq!(count_notifications(&[1, 2, 3, 4, 4], 4), Ok(0));
    assert_eq!(count_notifications(&[10, 20, 30, 40], 1), Ok(1));
}

/// Test the convenience function rejects bad input before counting.
#[test]
fn test_count_notifications_errors() {
    assert_eq!(count_notifications(&[], 1), Err(FraudError::EmptyInput));
    assert!(matches!(
        count_notifications(&[1, 2], 3),
        Err(FraudError::InvalidWindow { window: 3, .. })
    ));
    assert_eq!(
        count_notifications(&[300, 1, 2], 1),
        Err(FraudError::ValueOutOfRange {
            index: 0,
            value: 300,
            max: 200
        }),
        "Values inside the first window are validated too"
    );
}
