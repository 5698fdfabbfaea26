//! fm-db - Database layer for Foldermig
//!
//! This crate provides the `MigrationTarget` trait, the `user_version`
//! version store, and the SQLite implementation the migrator drives.

pub mod descriptor;
pub mod error;
pub mod sqlite;
pub mod traits;
pub mod version;

pub use descriptor::DatabaseDescriptor;
pub use error::{DbError, DbResult};
pub use sqlite::SqliteBackend;
pub use traits::MigrationTarget;
