//! Tests for core error types

use core_kernel::{parse_id, CoreError};

#[test]
fn test_identity_error_converts_into_core_error() {
    let err: CoreError = parse_id("123").unwrap_err().into();
    assert!(matches!(err, CoreError::Identity(_)));
    assert_eq!(err.to_string(), "Identity error: NRIC must be 12 digits, got 3");
}

#[test]
fn test_configuration_helper() {
    let err = CoreError::configuration("port");
    assert!(matches!(err, CoreError::Configuration(_)));
    assert_eq!(err.to_string(), "Configuration error: port");
}
