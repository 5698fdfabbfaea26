//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use fm_core::Config;
use fm_db::{DatabaseDescriptor, SqliteBackend};
use std::fmt;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) u8);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main.rs maps this to the process exit status.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Config plus global overrides, resolved against the project directory.
#[derive(Debug)]
pub(crate) struct ProjectContext {
    pub(crate) migrations: PathBuf,
    pub(crate) database: DatabaseDescriptor,
}

/// Load the project config and apply `--database`, `--migrations`, and
/// `--target`.
pub(crate) fn load_context(global: &GlobalArgs) -> Result<ProjectContext> {
    let root = &global.project_dir;
    let config = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(root)
            .with_context(|| format!("Failed to load config from {}", root.display()))?,
    };
    let target = global.target.as_deref();

    let database = match &global.database {
        Some(path) => DatabaseDescriptor::parse(path),
        None => DatabaseDescriptor::from_config(&config.database_for(target)?, root),
    };
    let migrations = match &global.migrations {
        Some(path) => path.clone(),
        None => root.join(config.migrations_path_for(target)?),
    };

    log::debug!(
        "Database: {database}, migrations root: {}",
        migrations.display()
    );
    Ok(ProjectContext {
        migrations,
        database,
    })
}

/// Open the database for read-only commands without creating a missing file.
///
/// A database file that does not exist yet behaves like a fresh one, so an
/// empty in-memory database stands in for it.
pub(crate) fn open_for_inspection(descriptor: &DatabaseDescriptor) -> Result<SqliteBackend> {
    if let DatabaseDescriptor::Path(path) = descriptor {
        if !path.exists() {
            log::info!(
                "Database {} does not exist yet; treating it as version 0",
                path.display()
            );
            return Ok(SqliteBackend::in_memory()?);
        }
    }
    SqliteBackend::open(descriptor).with_context(|| format!("Failed to open database {descriptor}"))
}

/// Global args pointing at `project_dir` with no overrides.
#[cfg(test)]
pub(crate) fn test_global(project_dir: &std::path::Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: project_dir.to_path_buf(),
        config: None,
        database: None,
        migrations: None,
        target: None,
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
