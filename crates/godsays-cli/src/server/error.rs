//! Error responses for the HTTP server.
//!
//! Every failure is rendered as a JSON body of the form
//! `{"error": "<code>", "message": "<text>"}` with the status code below:
//!
//! - `InvalidParameter`: 400 `invalid_parameter`
//! - `Generation`: 500 `generation_error`
//! - `EmptyMessage`: 500 `empty_message`
//! - `Encoding`: 500 `encoding_error`
//! - `Timeout`: 503 `timeout`

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query parameter failed validation.
    #[error("{0}")]
    InvalidParameter(godsays::Error),

    /// The generator rejected a request it should have accepted.
    #[error("{0}")]
    Generation(godsays::Error),

    /// The generator produced nothing.
    #[error("Failed to generate message")]
    EmptyMessage,

    /// A response body could not be serialized.
    #[error("Failed to encode response")]
    Encoding(#[source] serde_json::Error),

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::EmptyMessage | Self::Encoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::Generation(_) => "generation_error",
            Self::EmptyMessage => "empty_message",
            Self::Encoding(_) => "encoding_error",
            Self::Timeout => "timeout",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidParameter(_) => tracing::debug!("Rejected request: {self}"),
            // Logged by the timeout middleware, which still has the request.
            Self::Timeout => {}
            Self::Encoding(e) => tracing::error!("Failed to encode response: {e}"),
            Self::Generation(_) | Self::EmptyMessage => tracing::error!("{self}"),
        }

        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
        };
        let bytes = match serde_json::to_vec(&body) {
            Ok(bytes) => bytes,
            Err(_) => br#"{"error":"encoding_error"}"#.to_vec(),
        };

        (
            self.status(),
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            bytes,
        )
            .into_response()
    }
}
