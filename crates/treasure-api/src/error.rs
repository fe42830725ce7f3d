//! Treasure hunt: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use treasure_core::error::{FragmentError, SceneParseError};

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around domain errors that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A fragment could not be loaded.
    Fragment(FragmentError),
    /// The path named no known scene.
    UnknownScene(SceneParseError),
}

impl From<FragmentError> for ApiError {
    fn from(err: FragmentError) -> Self {
        Self::Fragment(err)
    }
}

impl From<SceneParseError> for ApiError {
    fn from(err: SceneParseError) -> Self {
        Self::UnknownScene(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::Fragment(e @ FragmentError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "fragment_not_found", e.to_string())
            }
            ApiError::Fragment(e @ FragmentError::Io { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "fragment_unavailable",
                e.to_string(),
            ),
            ApiError::UnknownScene(e) => (StatusCode::BAD_REQUEST, "unknown_scene", e.to_string()),
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
