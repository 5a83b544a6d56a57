//! Error types for the Gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coach_core::CoachError;
use thiserror::Error;

/// Gateway error type
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Session limit reached ({0} active)")]
    SessionLimit(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Serialization(e.to_string())
    }
}

impl From<CoachError> for GatewayError {
    fn from(e: CoachError) -> Self {
        match e {
            CoachError::UnknownPersona(name) => GatewayError::UnknownPersona(name),
            CoachError::InvalidLimits(msg) => GatewayError::InvalidConfig(msg),
        }
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::UnknownPersona(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::SessionLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::InvalidConfig(_)
            | GatewayError::Io(_)
            | GatewayError::Serialization(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let message = if status.is_server_error() {
            "internal error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Result type for Gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
