//! fm-migrate - Migration orchestrator for Foldermig
//!
//! Discovers numbered version folders under a migrations root, compares them
//! with the version persisted in the database, and applies the pending
//! folders' scripts in ascending order, advancing the persisted version once
//! per fully-applied folder.

pub mod error;
pub mod migrator;
pub mod report;
pub mod runner;
pub mod sink;

pub use error::{MigrateError, MigrateResult, ScriptError, ScriptFailure};
pub use migrator::Migrator;
pub use report::{
    AppliedVersion, MigrationPlan, MigrationReport, MigrationStatus, PendingVersion,
    VersionState, VersionStatus,
};
pub use runner::run_scripts;
pub use sink::{LogFacadeSink, LogSink, NoopSink, Severity};
