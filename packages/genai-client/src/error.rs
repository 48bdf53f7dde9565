//! Error types for the generative text client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, GenAIError>;

/// Generative text client errors.
#[derive(Debug, Error)]
pub enum GenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, quota, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The model answered but produced no text (blocked or empty candidate)
    #[error("Model returned no text")]
    Empty,
}
