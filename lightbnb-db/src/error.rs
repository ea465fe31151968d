//! Error types for lightbnb-db

use thiserror::Error;

use crate::models::ValidationError;

/// Failure reported by an [`Executor`](crate::Executor) while submitting a
/// statement or reading its rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage error: {message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Repository error type
#[derive(Error, Debug)]
pub enum DbError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A row came back but did not match the expected record shape.
    #[error("failed to decode {record} row: {source}")]
    Decode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A statement that must return a row (e.g. `INSERT ... RETURNING`) returned none.
    #[error("statement returned no {record} row")]
    EmptyResult { record: &'static str },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, DbError>;
