//! Core error types for beans-core.
//!
//! This module defines the error hierarchy using thiserror. Every failure
//! surfaces to the caller as a recoverable error; nothing is swallowed.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for beans-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The referenced challenge does not exist in the catalog.
    #[error("Challenge not found: {0}")]
    NotFound(String),

    /// The caller violated an operation contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No active challenges are available for daily selection.
    #[error("No active challenges in the catalog")]
    EmptyCatalog,

    /// No user profile exists yet; onboarding has not been completed.
    #[error("No user profile; complete onboarding first")]
    ProfileMissing,

    /// Persistence failures
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(DatabaseError::from(err))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
