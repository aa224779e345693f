//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Transport-level failures. Queue outcomes never end up here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request declared a JSON body that could not be parsed.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
