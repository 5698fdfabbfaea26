//! Plan command implementation

use anyhow::{Context, Result};
use fm_core::{MigrationItem, Version};
use fm_migrate::{LogFacadeSink, MigrationPlan, Migrator};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, PlanArgs};
use crate::commands::common::{load_context, open_for_inspection};

#[derive(Debug, Serialize)]
struct PlanOutput {
    current_version: Version,
    target_version: Version,
    pending: Vec<PendingRow>,
}

#[derive(Debug, Serialize)]
struct PendingRow {
    version: Version,
    folder: String,
    scripts: Vec<ScriptRow>,
}

#[derive(Debug, Serialize)]
struct ScriptRow {
    version: Version,
    name: String,
    path: String,
}

impl From<&MigrationItem> for ScriptRow {
    fn from(item: &MigrationItem) -> Self {
        Self {
            version: item.version,
            name: item.name.clone(),
            path: item.path.display().to_string(),
        }
    }
}

impl From<&MigrationPlan> for PlanOutput {
    fn from(plan: &MigrationPlan) -> Self {
        Self {
            current_version: plan.current_version,
            target_version: plan.target_version(),
            pending: plan
                .pending
                .iter()
                .map(|p| PendingRow {
                    version: p.folder.version,
                    folder: p.folder.name.clone(),
                    scripts: p.scripts.iter().map(ScriptRow::from).collect(),
                })
                .collect(),
        }
    }
}

/// Execute the plan command
pub(crate) fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = load_context(global)?;
    let backend = open_for_inspection(&ctx.database)?;

    let plan = Migrator::new(&ctx.migrations)
        .with_sink(LogFacadeSink)
        .plan_for(&backend)
        .context("Failed to plan migrations")?;
    let output = PlanOutput::from(&plan);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => print_table(&output),
    }
    Ok(())
}

fn print_table(output: &PlanOutput) {
    if output.pending.is_empty() {
        println!(
            "Database is up to date at version {}",
            output.current_version
        );
        return;
    }

    println!(
        "Would migrate from version {} to {}:",
        output.current_version, output.target_version
    );
    for pending in &output.pending {
        println!();
        println!("  Version {} ({})", pending.version, pending.folder);
        for script in &pending.scripts {
            println!("    {:>6}  {}", script.version, script.name);
        }
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
