/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses so handlers can return
 * `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Internal Server Error",
 *   "details": "No document to update: groups/g9"
 * }
 * ```
 *
 * `error` is the canonical reason phrase of the status; `details` carries the
 * underlying message unchanged.
 */

use axum::{
    response::{Response, IntoResponse},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::shared::groups::ErrorResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string(),
            details: Some(self.message()),
        };

        (status, Json(body)).into_response()
    }
}
