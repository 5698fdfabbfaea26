//! SQLite database backend implementation

use crate::descriptor::DatabaseDescriptor;
use crate::error::{DbError, DbResult};
use crate::traits::MigrationTarget;
use crate::version;
use fm_core::Version;
use rusqlite::Connection;
use std::path::Path;

/// SQLite database backend
///
/// Single-threaded, no `Mutex` needed because a migration run is sequential.
#[derive(Debug)]
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::ConnectionError {
            path: DatabaseDescriptor::Memory.to_string(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Open (or create) a SQLite database file
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Open whatever `descriptor` points at
    pub fn open(descriptor: &DatabaseDescriptor) -> DbResult<Self> {
        match descriptor {
            DatabaseDescriptor::Memory => Self::in_memory(),
            DatabaseDescriptor::Path(path) => Self::from_path(path),
        }
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Give back the underlying connection
    pub fn into_inner(self) -> Connection {
        self.conn
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> DbResult<()> {
        self.conn.close().map_err(|(_, e)| DbError::CloseError(e))
    }
}

impl MigrationTarget for SqliteBackend {
    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn read_version(&self) -> DbResult<Version> {
        version::read_version(&self.conn)
    }

    fn write_version(&self, version: Version) -> DbResult<()> {
        version::write_version(&self.conn, version)
    }

    fn db_type(&self) -> &'static str {
        "sqlite"
    }
}

/// Lets callers hand the migrator a bare `rusqlite::Connection` they already own.
impl MigrationTarget for Connection {
    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        Connection::execute_batch(self, sql)?;
        Ok(())
    }

    fn read_version(&self) -> DbResult<Version> {
        version::read_version(self)
    }

    fn write_version(&self, version: Version) -> DbResult<()> {
        version::write_version(self, version)
    }

    fn db_type(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
