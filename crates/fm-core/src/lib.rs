//! fm-core - Core library for Foldermig
//!
//! This crate provides the pieces of migration discovery that do not touch
//! the database: parsing numeric version prefixes from entry names, scanning
//! a directory into an ordered version map, and loading `foldermig.yml`.

pub mod config;
pub mod error;
pub mod identifier;
pub mod scan;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use identifier::{classify, parse_version_prefix, Classification, Version, MAX_VERSION};
pub use scan::{
    build_version_map, scan_directory, EntryKind, ListedEntry, MigrationItem, VersionMap,
};
