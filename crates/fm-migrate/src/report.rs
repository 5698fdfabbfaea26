//! Outcomes of runs, dry-run plans, and status queries.

use fm_core::{MigrationItem, Version};
use std::fmt;
use std::path::PathBuf;

/// A version folder applied during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedVersion {
    pub version: Version,
    pub folder: PathBuf,
    /// Number of scripts executed from the folder
    pub scripts: usize,
}

/// Summary of a migration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Version read from the database before applying anything.
    ///
    /// `None` when the migrations root had no version folders and the
    /// database was never consulted.
    pub starting_version: Option<Version>,
    /// Folders applied, in the order they ran
    pub applied: Vec<AppliedVersion>,
    /// Folder versions at or below the starting version
    pub skipped: Vec<Version>,
}

impl MigrationReport {
    /// Version the database is left at
    pub fn final_version(&self) -> Option<Version> {
        self.applied
            .last()
            .map(|a| a.version)
            .or(self.starting_version)
    }

    /// Total scripts executed across all applied folders
    pub fn scripts_applied(&self) -> usize {
        self.applied.iter().map(|a| a.scripts).sum()
    }

    /// Whether the run changed nothing
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// A version folder that a run would apply, with its ordered scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVersion {
    pub folder: MigrationItem,
    pub scripts: Vec<MigrationItem>,
}

/// Dry-run result: what a run starting at `current_version` would do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    pub current_version: Version,
    pub pending: Vec<PendingVersion>,
}

impl MigrationPlan {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Version the database would reach
    pub fn target_version(&self) -> Version {
        self.pending
            .last()
            .map(|p| p.folder.version)
            .unwrap_or(self.current_version)
    }
}

/// Whether a discovered version folder is already in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionState {
    Applied,
    Pending,
}

impl fmt::Display for VersionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionState::Applied => write!(f, "applied"),
            VersionState::Pending => write!(f, "pending"),
        }
    }
}

/// One discovered version folder and its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStatus {
    pub version: Version,
    pub name: String,
    pub path: PathBuf,
    pub state: VersionState,
}

/// Database version alongside every discovered version folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub current_version: Version,
    pub versions: Vec<VersionStatus>,
}

impl MigrationStatus {
    pub fn pending_count(&self) -> usize {
        self.versions
            .iter()
            .filter(|v| v.state == VersionState::Pending)
            .count()
    }

    /// Highest version folder found on disk
    pub fn latest_available(&self) -> Option<Version> {
        self.versions.last().map(|v| v.version)
    }
}
