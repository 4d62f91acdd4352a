//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so error bodies have the same shape across
//! endpoints.
//!
//! # Key invariants and assumptions
//! - Error responses include a stable `code` and a human-readable `message`.
//! - Not-found on hotel routes is not an `ApiError`: those responses carry an empty body.
//!
//! # Security considerations
//! - Internal errors log details server-side but return generic messages.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
///
/// # Example
/// ```rust
/// use axum::http::StatusCode;
/// use hotel_api::api::error::ApiError;
/// use hotel_api::api::types::ErrorResponse;
///
/// let err = ApiError {
///     status: StatusCode::BAD_REQUEST,
///     body: ErrorResponse {
///         code: "validation_error".to_string(),
///         message: "bad body".to_string(),
///         request_id: None,
///     },
/// };
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error and returns a generic internal error response.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "hotel storage error");
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            code: "internal".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 400 Bad Request validation error.
///
/// Used when the path or body cannot be decoded into the expected types.
pub fn api_validation_error(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            code: "validation_error".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}
