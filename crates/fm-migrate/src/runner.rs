//! Script runner: executes one version folder's scripts in order.

use crate::error::{ScriptError, ScriptFailure};
use crate::sink::{LogSink, Severity};
use fm_core::{MigrationItem, VersionMap};
use fm_db::MigrationTarget;

/// Execute every script in `scripts`, lowest version first.
///
/// Each file is read whole and handed to the database as one batch. The
/// first read or execution failure stops the run; later scripts are not
/// attempted and nothing already executed is undone. Returns the number of
/// scripts executed.
pub fn run_scripts(
    target: &dyn MigrationTarget,
    scripts: &VersionMap,
    sink: &dyn LogSink,
) -> Result<usize, ScriptError> {
    let mut executed = 0;
    for script in scripts {
        sink.log(
            Severity::Debug,
            &format!(
                "Running script {} '{}' ({})",
                script.version,
                script.name,
                script.path.display()
            ),
        );

        let sql = std::fs::read_to_string(&script.path)
            .map_err(|e| script_error(script, ScriptFailure::Read(e)))?;
        target
            .execute_batch(&sql)
            .map_err(|e| script_error(script, ScriptFailure::Execute(e)))?;

        sink.log(
            Severity::Debug,
            &format!("Script {} '{}' succeeded", script.version, script.name),
        );
        executed += 1;
    }
    Ok(executed)
}

fn script_error(script: &MigrationItem, cause: ScriptFailure) -> ScriptError {
    ScriptError {
        version: script.version,
        name: script.name.clone(),
        path: script.path.clone(),
        cause,
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
