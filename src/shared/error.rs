//! Shared Error Types
//!
//! This module defines error types that are shared between the client view
//! and the gateway. They cover the boundary step where untyped JSON becomes
//! a typed `Group` or `Post`.
//!
//! # Error Categories
//!
//! - `ValidationError` - a payload had the wrong shape
//!
//! # Usage
//!
//! ```rust
//! use groupdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "missing or not a string");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Payload shape error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
