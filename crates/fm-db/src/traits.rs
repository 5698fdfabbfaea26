//! Migration target trait definition

use crate::error::DbResult;
use fm_core::Version;

/// A database the migrator can apply scripts to.
///
/// Calls are blocking. Implementations hold a single connection and are
/// driven by one caller at a time.
pub trait MigrationTarget {
    /// Execute a script containing one or more SQL statements
    fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Highest fully-applied migration version (0 when never set)
    fn read_version(&self) -> DbResult<Version>;

    /// Overwrite the persisted migration version
    fn write_version(&self, version: Version) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
