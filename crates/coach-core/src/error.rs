//! Error types for the coaching core

use thiserror::Error;

/// Failure of a completion provider call.
///
/// Every variant is recoverable from the orchestrator's point of view: each
/// call site has a persona-correct static fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Core error type
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Invalid context limits: {0}")]
    InvalidLimits(String),

}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoachError>;
