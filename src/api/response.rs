//! Response types for the solver API.
//!
//! Errors are returned as plain text: the body is the human-readable error
//! message, paired with an HTTP status code.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::EngineError;

/// API error with HTTP status code and plain-text message.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The message written as the response body.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 response for invalid client input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}

impl From<&EngineError> for ApiError {
    fn from(error: &EngineError) -> Self {
        match error {
            // Malformed input and unsolvable systems are all client errors.
            EngineError::Parse(_) | EngineError::Solve(_) => ApiError::bad_request(error.to_string()),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Configuration error")
            }
        }
    }
}
