//! Migration orchestrator.
//!
//! A run validates the migrations root, scans it for numbered version
//! folders, reads the database's persisted version, and applies every folder
//! above it in ascending order. The persisted version is written once per
//! folder, and only after all of that folder's scripts succeeded. A failure
//! leaves the version where it was, so the next run retries the whole folder.

use crate::error::{MigrateError, MigrateResult};
use crate::report::{
    AppliedVersion, MigrationPlan, MigrationReport, MigrationStatus, PendingVersion,
    VersionState, VersionStatus,
};
use crate::runner::run_scripts;
use crate::sink::{LogSink, NoopSink, Severity};
use fm_core::{scan_directory, EntryKind, MigrationItem, Version, VersionMap};
use fm_db::{DatabaseDescriptor, MigrationTarget, SqliteBackend};
use std::path::{Path, PathBuf};

/// Applies numbered version folders under a migrations root to a database.
pub struct Migrator {
    root: PathBuf,
    sink: Box<dyn LogSink>,
}

impl Migrator {
    /// Create a migrator for the version folders under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sink: Box::new(NoopSink),
        }
    }

    /// Send lifecycle events to `sink`
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Migrations root this migrator scans
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bring an already-open database up to the newest version folder.
    ///
    /// The caller keeps ownership of the connection.
    pub fn run(&self, target: &dyn MigrationTarget) -> MigrateResult<MigrationReport> {
        self.begin_run();
        let result = self.discover().and_then(|folders| {
            if folders.is_empty() {
                Ok(self.nothing_to_do())
            } else {
                self.apply(target, &folders)
            }
        });
        result.map_err(|e| self.fail(e))
    }

    /// Open the database at `descriptor`, migrate it, and close it again.
    ///
    /// No connection is opened when the root is missing or holds no version
    /// folders. On failure the connection is dropped without committing
    /// anything further.
    pub fn run_at(&self, descriptor: &DatabaseDescriptor) -> MigrateResult<MigrationReport> {
        self.begin_run();
        self.run_at_inner(descriptor).map_err(|e| self.fail(e))
    }

    fn run_at_inner(&self, descriptor: &DatabaseDescriptor) -> MigrateResult<MigrationReport> {
        let folders = self.discover()?;
        if folders.is_empty() {
            return Ok(self.nothing_to_do());
        }

        self.sink
            .log(Severity::Debug, &format!("Opening database {descriptor}"));
        let backend = SqliteBackend::open(descriptor)?;
        let report = self.apply(&backend, &folders)?;
        backend.close()?;
        Ok(report)
    }

    /// Work out what a run starting at `current` would apply, without
    /// touching a database.
    ///
    /// Pending folders are validated exactly as a run would validate them.
    pub fn plan(&self, current: Version) -> MigrateResult<MigrationPlan> {
        self.plan_inner(current).map_err(|e| self.fail(e))
    }

    /// [`Migrator::plan`] starting from the version stored in `target`
    pub fn plan_for(&self, target: &dyn MigrationTarget) -> MigrateResult<MigrationPlan> {
        target
            .read_version()
            .map_err(MigrateError::from)
            .and_then(|current| self.plan_inner(current))
            .map_err(|e| self.fail(e))
    }

    fn plan_inner(&self, current: Version) -> MigrateResult<MigrationPlan> {
        let folders = self.discover()?;
        let mut pending = Vec::new();
        for folder in folders.iter().filter(|f| f.version > current) {
            let scripts = self.scripts_for(folder)?;
            pending.push(PendingVersion {
                folder: folder.clone(),
                scripts: scripts.iter().cloned().collect(),
            });
        }
        Ok(MigrationPlan {
            current_version: current,
            pending,
        })
    }

    /// Report the stored version and which discovered folders are applied.
    ///
    /// Only the root is scanned; version folders are not opened.
    pub fn status(&self, target: &dyn MigrationTarget) -> MigrateResult<MigrationStatus> {
        self.status_inner(target).map_err(|e| self.fail(e))
    }

    fn status_inner(&self, target: &dyn MigrationTarget) -> MigrateResult<MigrationStatus> {
        let folders = self.discover()?;
        let current = target.read_version()?;
        let versions = folders
            .iter()
            .map(|folder| VersionStatus {
                version: folder.version,
                name: folder.name.clone(),
                path: folder.path.clone(),
                state: if folder.version <= current {
                    VersionState::Applied
                } else {
                    VersionState::Pending
                },
            })
            .collect();
        Ok(MigrationStatus {
            current_version: current,
            versions,
        })
    }

    fn begin_run(&self) {
        self.sink.log(
            Severity::Information,
            &format!("Starting migration run in {}", self.root.display()),
        );
    }

    /// Validate the root and scan it for version folders.
    fn discover(&self) -> MigrateResult<VersionMap> {
        if !self.root.is_dir() {
            return Err(MigrateError::PathNotFound {
                path: self.root.display().to_string(),
            });
        }

        let folders = scan_directory(&self.root, EntryKind::Folder).map_err(|e| {
            MigrateError::DiscoveryFailed {
                path: self.root.display().to_string(),
                version: None,
                source: e,
            }
        })?;
        self.sink.log(
            Severity::Debug,
            &format!(
                "Found {} version folder(s) in {}",
                folders.len(),
                self.root.display()
            ),
        );
        Ok(folders)
    }

    /// Scan a version folder for its scripts; an empty folder is an error.
    fn scripts_for(&self, folder: &MigrationItem) -> MigrateResult<VersionMap> {
        let scripts = scan_directory(&folder.path, EntryKind::File).map_err(|e| {
            MigrateError::DiscoveryFailed {
                path: folder.path.display().to_string(),
                version: Some(folder.version),
                source: e,
            }
        })?;
        if scripts.is_empty() {
            return Err(MigrateError::EmptyVersionFolder {
                path: folder.path.display().to_string(),
                version: folder.version,
            });
        }
        Ok(scripts)
    }

    fn nothing_to_do(&self) -> MigrationReport {
        self.sink.log(
            Severity::Information,
            &format!(
                "No version folders in {}, nothing to apply",
                self.root.display()
            ),
        );
        MigrationReport::default()
    }

    fn apply(
        &self,
        target: &dyn MigrationTarget,
        folders: &VersionMap,
    ) -> MigrateResult<MigrationReport> {
        let current = target.read_version()?;
        self.sink.log(
            Severity::Information,
            &format!("Database ({}) is at version {current}", target.db_type()),
        );
        if let Some(latest) = folders.max_version().filter(|latest| current > *latest) {
            self.sink.log(
                Severity::Warning,
                &format!(
                    "Database version {current} is ahead of the newest version folder ({latest})"
                ),
            );
        }

        let mut report = MigrationReport {
            starting_version: Some(current),
            ..MigrationReport::default()
        };

        for folder in folders {
            if folder.version <= current {
                self.sink.log(
                    Severity::Debug,
                    &format!(
                        "Skipping version {} ('{}'): already applied",
                        folder.version, folder.name
                    ),
                );
                report.skipped.push(folder.version);
                continue;
            }

            let scripts = self.scripts_for(folder)?;
            self.sink.log(
                Severity::Information,
                &format!(
                    "Applying version {} ('{}') with {} script(s)",
                    folder.version,
                    folder.name,
                    scripts.len()
                ),
            );
            let executed = run_scripts(target, &scripts, self.sink.as_ref())?;
            target.write_version(folder.version)?;
            self.sink.log(
                Severity::Information,
                &format!("Database is now at version {}", folder.version),
            );

            report.applied.push(AppliedVersion {
                version: folder.version,
                folder: folder.path.clone(),
                scripts: executed,
            });
        }

        self.sink.log(
            Severity::Information,
            &format!(
                "Migration run complete: {} version(s) applied, database at version {}",
                report.applied.len(),
                report.final_version().unwrap_or(current)
            ),
        );
        Ok(report)
    }

    /// Log `err` at error severity on its way out.
    fn fail(&self, err: MigrateError) -> MigrateError {
        self.sink.log(Severity::Error, &err.to_string());
        err
    }
}

#[cfg(test)]
#[path = "migrator_test.rs"]
mod tests;
