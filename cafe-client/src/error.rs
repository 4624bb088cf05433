//! Client error types

use shared::ShapeError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsed but has the wrong shape
    #[error("Unexpected payload: {0}")]
    Shape(#[from] ShapeError),

    /// Body is not valid JSON for the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configured URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Every candidate source failed
    #[error("No source succeeded ({tried} tried)")]
    NoSourceSucceeded { tried: usize },
}

impl ClientError {
    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
