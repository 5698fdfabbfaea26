//! Error types for fm-migrate

use fm_core::{CoreError, Version};
use fm_db::DbError;
use std::path::PathBuf;
use thiserror::Error;

/// Migration run errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Migrations root does not exist or is not a directory (M001)
    #[error("[M001] Migrations root not found: {path}")]
    PathNotFound { path: String },

    /// Scanning the root or a version folder failed (M002)
    #[error("[M002] Failed to discover migrations in {path}{}: {source}", target_suffix(.version))]
    DiscoveryFailed {
        path: String,
        /// Version being prepared when a version folder scan failed
        version: Option<Version>,
        source: CoreError,
    },

    /// A pending version folder holds no numbered scripts (M003)
    #[error("[M003] Version folder {path} (version {version}) contains no numbered scripts")]
    EmptyVersionFolder { path: String, version: Version },

    /// A script could not be read or executed (M004)
    #[error("[M004] {0}")]
    ScriptExecutionFailed(#[from] ScriptError),

    /// Opening the database or reading/writing its version failed (M005)
    #[error("[M005] Database error: {0}")]
    Database(#[from] DbError),
}

fn target_suffix(version: &Option<Version>) -> String {
    version
        .map(|v| format!(" (target version {v})"))
        .unwrap_or_default()
}

impl MigrateError {
    /// The scan error behind a [`MigrateError::DiscoveryFailed`]
    pub fn core_error(&self) -> Option<&CoreError> {
        match self {
            MigrateError::DiscoveryFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether discovery failed because two siblings share a version number
    pub fn is_duplicate_version(&self) -> bool {
        matches!(
            self.core_error(),
            Some(CoreError::DuplicateVersionIdentifier { .. })
        )
    }
}

/// Result type alias for MigrateError
pub type MigrateResult<T> = Result<T, MigrateError>;

/// A script that failed, with the cause preserved as its source.
#[derive(Error, Debug)]
#[error("Script {version} '{name}' ({}) failed: {cause}", .path.display())]
pub struct ScriptError {
    pub version: Version,
    pub name: String,
    pub path: PathBuf,
    #[source]
    pub cause: ScriptFailure,
}

/// Why a script failed
#[derive(Error, Debug)]
pub enum ScriptFailure {
    #[error("could not read script: {0}")]
    Read(#[source] std::io::Error),

    #[error("execution failed: {0}")]
    Execute(#[source] DbError),
}
