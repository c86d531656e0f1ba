//! Custom error types for the console.

use thiserror::Error;

/// Console errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("API error: {0}")]
    Api(#[from] traineeapp_client::TraineeError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
