use latency_core::{NonFiniteError, ValidationError};
use thiserror::Error;

/// Result type for optimizer client operations
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// Errors that can occur when using the optimizer client
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// HTTP request failed after reaching the service
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Parameters rejected locally, before or instead of contacting the service
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Local solve overflowed; the service answers the same input with HTTP 500
    #[error("Local optimization failed: {0}")]
    SolverFailed(#[from] NonFiniteError),

    /// Parameters rejected by the service (HTTP 400)
    #[error("Rejected by service: {0}")]
    Rejected(String),

    /// Service returned another error status
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
