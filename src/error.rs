//! Error types for quarantine operations

use thiserror::Error;

/// Errors that can occur while talking to the appliance or the operator
#[derive(Error, Debug)]
pub enum QuarantineError {
    /// Transport-level HTTP failure (connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The appliance answered with something other than 200
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// Response body did not have the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operator typed something that is not a message id
    #[error("Invalid MID value: {0:?}")]
    InvalidMid(String),

    /// Invalid base URL or other configuration problem
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for quarantine operations
pub type Result<T> = std::result::Result<T, QuarantineError>;
