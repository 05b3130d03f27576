//! Mapping of library errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nearschool::SchoolError;

use crate::handlers::ErrorResponse;

/// A failed request, ready to be rendered as JSON.
///
/// Store failures keep the underlying error for the log only; callers see
/// the generic `message`.
#[derive(Debug)]
pub enum ApiError {
    /// Caller input was rejected before reaching the store.
    BadRequest(String),
    /// The store failed.
    Store {
        message: &'static str,
        source: SchoolError,
    },
}

impl ApiError {
    /// Wrap a store failure with the message shown to callers.
    pub fn store(message: &'static str, source: SchoolError) -> Self {
        ApiError::Store { message, source }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SchoolError> for ApiError {
    fn from(e: SchoolError) -> Self {
        if e.is_validation() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::store("Internal server error", e)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Request rejected");
                message
            }
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, "Store operation failed");
                message.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
