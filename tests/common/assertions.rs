//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

use serde_json::Value;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected {:?} to contain {:?}",
            $haystack,
            $needle
        );
    };
}

/// Assert that a body is the gateway's 500 envelope with the given details
pub fn assert_error_envelope(body: &Value, details: &str) {
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("Internal Server Error"),
        "unexpected error envelope: {}",
        body
    );
    assert_eq!(
        body.get("details").and_then(Value::as_str),
        Some(details),
        "unexpected error details: {}",
        body
    );
}

/// Assert that a body is the `{message}` envelope with the given text
pub fn assert_message(body: &Value, message: &str) {
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(message),
        "unexpected message envelope: {}",
        body
    );
}
