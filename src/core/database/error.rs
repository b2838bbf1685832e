//! Database error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Errors that can occur while connecting to or querying the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A required connection variable is not set.
    #[error("Missing environment variable {0}")]
    MissingVariable(&'static str),

    /// The port variable is not a valid TCP port.
    #[error("Invalid database port '{value}'")]
    InvalidPort { value: String },

    /// The server was unreachable or rejected the credentials.
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] tokio_postgres::Error),

    /// Connecting took longer than the configured timeout.
    #[error("Database connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// The database rejected a statement or a row could not be decoded.
    #[error("Query failed: {0}")]
    Query(#[source] tokio_postgres::Error),

    /// A statement took longer than the configured timeout.
    #[error("Query timed out after {0:?}")]
    QueryTimeout(Duration),
}

impl DatabaseError {
    /// Whether this error happened before a usable connection existed.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::MissingVariable(_)
                | Self::InvalidPort { .. }
                | Self::Connect(_)
                | Self::ConnectTimeout(_)
        )
    }
}
