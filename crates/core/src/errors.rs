//! Core error types for RaceDB.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use racedb_race_data::RaceDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for RaceDB.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Race data operation failed: {0}")]
    RaceData(#[from] RaceDataError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether the error was caused by the caller's input and should be
    /// reported as a bad request rather than a server failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::RaceData(err) => err.is_validation(),
            Error::Database(_) | Error::Unexpected(_) => false,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed and was rolled back.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

/// Validation errors for caller input.
///
/// Malformed provider text (fees, timestamps) is never a validation error;
/// the storage layer degrades it to zero or null instead.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        let err: Error = ValidationError::InvalidInput("invalid race id: 0".to_string()).into();
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid input: invalid race id: 0"
        );

        let err: Error = RaceDataError::Validation("state parameter is required".to_string()).into();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_upstream_and_storage_errors_are_server_errors() {
        let err: Error = RaceDataError::Parse("unexpected payload".to_string()).into();
        assert!(!err.is_client_error());

        let err: Error = DatabaseError::TransactionFailed("rolled back".to_string()).into();
        assert!(!err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Database operation failed: Transaction failed: rolled back"
        );

        let err = Error::Unexpected("writer returned a value of the wrong type".to_string());
        assert!(!err.is_client_error());
    }
}
