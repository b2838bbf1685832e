//! Employee operation errors.

use thiserror::Error;

use crate::core::database::DatabaseError;

/// A caller-supplied value that breaks a business rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name empty")]
    EmptyName,

    #[error("salary non-positive")]
    NonPositiveSalary,

    #[error("bad date format: '{0}'")]
    BadDateFormat(String),

    #[error("limit non-positive: {0}")]
    NonPositiveLimit(i64),
}

/// Errors produced by employee operations.
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Configuration missing, database unreachable or credentials rejected.
    #[error("connection error: {0}")]
    Connection(#[source] DatabaseError),

    /// Input rejected before touching the database.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The database rejected the statement or returned an unexpected row.
    #[error("query error: {0}")]
    Query(#[source] DatabaseError),
}

impl From<DatabaseError> for EmployeeError {
    fn from(err: DatabaseError) -> Self {
        if err.is_connection() {
            Self::Connection(err)
        } else {
            Self::Query(err)
        }
    }
}

impl From<tokio_postgres::Error> for EmployeeError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Query(DatabaseError::Query(err))
    }
}
