/**
 * Backend Error Types
 *
 * This module defines error types specific to the gateway.
 * These errors are returned from handlers and converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * Raised by the document store while performing the single operation a
 * handler maps to: unknown group, missing request field, backend failure.
 *
 * ## Body Errors
 *
 * The request body could not be read as the endpoint's JSON shape (wrong
 * content type, malformed JSON, wrong field types).
 *
 * Both surface as 500 with the underlying message.
 */

use thiserror::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use crate::backend::groups::store::StoreError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use groupdesk::backend::error::BackendError;
/// use groupdesk::backend::StoreError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::from(StoreError::not_found("g9"));
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Document store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request body rejected by the JSON extractor
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// Every gateway failure is reported as 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message passed back to the caller as `details`
    pub fn message(&self) -> String {
        self.to_string()
    }
}
