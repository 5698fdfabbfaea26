//! Error types for fm-core

use crate::identifier::Version;
use thiserror::Error;

/// Core error type for Foldermig
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Directory does not exist or is not a directory
    #[error("[C001] Path not found: {path}")]
    PathNotFound { path: String },

    /// C002: Two sibling entries share the same numeric prefix
    #[error(
        "[C002] Duplicate version {version} in {directory}: '{first}' and '{second}'"
    )]
    DuplicateVersionIdentifier {
        directory: String,
        version: Version,
        first: String,
        second: String,
    },

    /// C003: Configuration file not found
    #[error("[C003] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C004: Failed to parse configuration file
    #[error("[C004] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// C005: Invalid configuration value
    #[error("[C005] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C006: IO error with path context
    #[error("[C006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_yaml::Error> for CoreError {
    fn from(err: serde_yaml::Error) -> Self {
        CoreError::ConfigParseError {
            message: err.to_string(),
        }
    }
}
