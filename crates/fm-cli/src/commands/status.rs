//! Status command implementation

use anyhow::{Context, Result};
use fm_core::Version;
use fm_migrate::{LogFacadeSink, MigrationStatus, Migrator};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common::{load_context, open_for_inspection, ExitCode};

#[derive(Debug, Serialize)]
struct StatusOutput {
    database: String,
    current_version: Version,
    latest_available: Option<Version>,
    pending_count: usize,
    versions: Vec<VersionRow>,
}

#[derive(Debug, Serialize)]
struct VersionRow {
    version: Version,
    name: String,
    path: String,
    state: String,
}

impl StatusOutput {
    fn new(database: String, status: &MigrationStatus) -> Self {
        Self {
            database,
            current_version: status.current_version,
            latest_available: status.latest_available(),
            pending_count: status.pending_count(),
            versions: status
                .versions
                .iter()
                .map(|v| VersionRow {
                    version: v.version,
                    name: v.name.clone(),
                    path: v.path.display().to_string(),
                    state: v.state.to_string(),
                })
                .collect(),
        }
    }
}

/// Execute the status command
pub(crate) fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = load_context(global)?;
    let backend = open_for_inspection(&ctx.database)?;

    let status = Migrator::new(&ctx.migrations)
        .with_sink(LogFacadeSink)
        .status(&backend)
        .context("Failed to read migration status")?;
    let output = StatusOutput::new(ctx.database.to_string(), &status);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => print_table(&output),
    }

    if args.check && output.pending_count > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

fn print_table(output: &StatusOutput) {
    println!("Database: {}", output.database);
    println!("Current version: {}", output.current_version);
    if output.versions.is_empty() {
        println!("No version folders found");
        return;
    }

    println!();
    println!("{:<10} {:<8} FOLDER", "VERSION", "STATE");
    for row in &output.versions {
        println!("{:<10} {:<8} {}", row.version, row.state, row.name);
    }
    println!();
    println!(
        "{} pending version{}",
        output.pending_count,
        if output.pending_count == 1 { "" } else { "s" }
    );
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
