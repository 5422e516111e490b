//! Error types for eventboard.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur in eventboard operations.
#[derive(Error, Debug)]
pub enum EventBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Network response was not ok ({0})")]
    Status(reqwest::StatusCode),

    #[error("Could not parse events document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for eventboard operations.
pub type EventBoardResult<T> = Result<T, EventBoardError>;
