//! Persisted schema version backed by SQLite's `user_version` header field.
//!
//! A database that has never had the field set reports 0. The field is a
//! signed 32-bit integer, so only `0..=MAX_VERSION` is accepted either way.

use crate::error::{DbError, DbResult};
use fm_core::{Version, MAX_VERSION};
use rusqlite::Connection;

/// Read the current `user_version`.
pub fn read_version(conn: &Connection) -> DbResult<Version> {
    let raw: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Version::try_from(raw)
        .ok()
        .filter(|v| *v <= MAX_VERSION)
        .ok_or(DbError::InvalidVersion {
            value: raw,
            max: MAX_VERSION,
        })
}

/// Overwrite `user_version` with `version`.
pub fn write_version(conn: &Connection, version: Version) -> DbResult<()> {
    if version > MAX_VERSION {
        return Err(DbError::InvalidVersion {
            value: i64::from(version),
            max: MAX_VERSION,
        });
    }
    // PRAGMA does not take bound parameters; the literal comes from a checked integer.
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
    Ok(())
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
