use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Status payload sent back on every failed request: `{status, message}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Numeric status code, as a string
    pub status: String,
    pub message: String,
    #[serde(skip)]
    pub code: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.code, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    ApiError {
        status: status.as_u16().to_string(),
        message: message.to_string(),
        code: status.as_u16(),
    }
}

/// Maps a store failure on a mutating path. Update and delete report every
/// failure, a missing user included, as an internal error.
pub fn store_error(err: &Error) -> ApiError {
    error!("Store operation failed: {}", err);
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
}
