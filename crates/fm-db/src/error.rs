//! Error types for fm-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {path}: {source}")]
    ConnectionError {
        path: String,
        source: rusqlite::Error,
    },

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(#[source] rusqlite::Error),

    /// Stored or requested version outside the `user_version` range (D003)
    #[error("[D003] Schema version {value} is outside the range 0..={max}")]
    InvalidVersion { value: i64, max: u32 },

    /// Connection could not be closed cleanly (D004)
    #[error("[D004] Failed to close database: {0}")]
    CloseError(#[source] rusqlite::Error),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::ExecutionError(err)
    }
}
