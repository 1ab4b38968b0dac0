use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum RadioError {
    // I/O errors
    Io(std::io::Error),

    // Request validation errors
    InvalidRequest(String),
    PayloadTooLarge { size: usize, limit: usize },

    // Startup errors
    Logging(String),
    InvalidArgument(String),
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioError::Io(e) => write!(f, "I/O error: {}", e),
            RadioError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            RadioError::PayloadTooLarge { size, limit } => write!(
                f,
                "Request body too large: {} bytes (limit: {} bytes)",
                size, limit
            ),
            RadioError::Logging(msg) => write!(f, "Logging setup failed: {}", msg),
            RadioError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for RadioError {}

// Conversions
impl From<std::io::Error> for RadioError {
    fn from(err: std::io::Error) -> Self {
        RadioError::Io(err)
    }
}

impl From<serde_json::Error> for RadioError {
    fn from(err: serde_json::Error) -> Self {
        RadioError::InvalidRequest(err.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for RadioError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        RadioError::Logging(err.to_string())
    }
}

// Axum integration
impl IntoResponse for RadioError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RadioError::InvalidRequest(_) | RadioError::InvalidArgument(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            RadioError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Radio read API error".to_string(),
                )
            }
        };

        (
            status,
            axum::Json(ErrorResponse {
                ok: false,
                error: message,
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, RadioError>;
