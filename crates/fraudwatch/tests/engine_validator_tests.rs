//! Tests for input validation utilities.
//!
//! These tests verify the precondition checks run before counting:
//! - Sequence validation (emptiness, domain bounds)
//! - Window validation against the sequence length
//! - Parameter validation (domain bound, threshold factor, duplicates)
//! - Error messages
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Sequences and values
//! 2. **Window Validation** - Lengths and bounds
//! 3. **Parameter Validation** - Builder parameters
//! 4. **Error Messages** - Display output

use fraudwatch::internals::engine::validator::Validator;
use fraudwatch::internals::primitives::errors::FraudError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test validation rejects an empty sequence.
#[test]
fn test_validate_empty_sequence() {
    let res = Validator::validate_sequence(&[], 200);

    assert!(
        matches!(res, Err(FraudError::EmptyInput)),
        "Empty input should error"
    );
}

/// Test validation reports the first out-of-domain value.
#[test]
fn test_validate_first_out_of_range() {
    let res = Validator::validate_sequence(&[0, 200, 201, 500], 200);

    assert_eq!(
        res,
        Err(FraudError::ValueOutOfRange {
            index: 2,
            value: 201,
            max: 200
        }),
        "Should fail fast on the first offending day"
    );
}

/// Test validation accepts values on the domain edges.
#[test]
fn test_validate_domain_edges() {
    assert!(Validator::validate_sequence(&[0, 200], 200).is_ok());
    assert!(Validator::validate_value(0, 0, 0).is_ok());
}

// ============================================================================
// Window Validation Tests
// ============================================================================

/// Test window bounds against the sequence length.
#[test]
fn test_validate_window_bounds() {
    assert!(Validator::validate_window(1, 1).is_ok());
    assert!(Validator::validate_window(5, 5).is_ok());
    assert!(matches!(
        Validator::validate_window(0, 5),
        Err(FraudError::InvalidWindow {
            window: 0,
            len: Some(5)
        })
    ));
    assert!(matches!(
        Validator::validate_window(6, 5),
        Err(FraudError::InvalidWindow {
            window: 6,
            len: Some(5)
        })
    ));
}

/// Test window length validation without a sequence.
#[test]
fn test_validate_window_length() {
    assert!(Validator::validate_window_length(1).is_ok());
    assert_eq!(
        Validator::validate_window_length(0),
        Err(FraudError::InvalidWindow {
            window: 0,
            len: None
        })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test the domain bound cap.
#[test]
fn test_validate_max_value() {
    assert!(Validator::validate_max_value(0).is_ok());
    assert!(Validator::validate_max_value(1_000_000).is_ok());
    assert_eq!(
        Validator::validate_max_value(1_000_001),
        Err(FraudError::InvalidMaxValue(1_000_001))
    );
}

/// Test threshold factor validation.
#[test]
fn test_validate_factor() {
    assert!(Validator::validate_factor(0.0).is_ok());
    assert!(Validator::validate_factor(2.0).is_ok());
    assert!(Validator::validate_factor(-0.5).is_err());
    assert!(Validator::validate_factor(f64::NAN).is_err());
    assert!(Validator::validate_factor(f64::INFINITY).is_err());
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("window")),
        Err(FraudError::DuplicateParameter {
            parameter: "window"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error messages carry their context.
#[test]
fn test_error_display() {
    let window = FraudError::InvalidWindow {
        window: 7,
        len: Some(5),
    };
    assert_eq!(window.to_string(), "Invalid window: 7 (must be between 1 and 5)");

    let unbounded = FraudError::InvalidWindow {
        window: 0,
        len: None,
    };
    assert_eq!(unbounded.to_string(), "Invalid window: 0 (must be at least 1)");

    let range = FraudError::ValueOutOfRange {
        index: 3,
        value: 250,
        max: 200,
    };
    assert_eq!(
        range.to_string(),
        "Value out of range at day 3: 250 (must be between 0 and 200)"
    );

    let invariant = FraudError::InvariantViolation("drift".into());
    assert!(invariant.to_string().contains("drift"));
    assert!(invariant.is_invariant_violation());
    assert!(!FraudError::EmptyInput.is_invariant_violation());
}

/// Test the error type works as a boxed standard error.
#[test]
fn test_error_is_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(FraudError::EmptyInput);

    assert_eq!(boxed.to_string(), "Expenditure sequence is empty");
}
