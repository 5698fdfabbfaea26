//! Migrate command implementation

use anyhow::{Context, Result};
use fm_migrate::{LogFacadeSink, Migrator};

use crate::cli::GlobalArgs;
use crate::commands::common::load_context;

/// Execute the migrate command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = load_context(global)?;

    println!(
        "Migrating {} using {}",
        ctx.database,
        ctx.migrations.display()
    );

    let report = Migrator::new(&ctx.migrations)
        .with_sink(LogFacadeSink)
        .run_at(&ctx.database)
        .context("Migration failed")?;

    if report.starting_version.is_none() {
        println!("No version folders found; nothing to do");
        return Ok(());
    }

    for applied in &report.applied {
        println!(
            "  Applied version {} ({} script{})",
            applied.version,
            applied.scripts,
            if applied.scripts == 1 { "" } else { "s" }
        );
    }

    println!();
    match (report.starting_version, report.final_version()) {
        (Some(from), Some(to)) if from != to => {
            println!("Database migrated from version {from} to {to}")
        }
        (_, Some(to)) => println!("Database is up to date at version {to}"),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
