//! Where to open a database from.

use fm_core::config::{DatabaseConfig, MEMORY_DATABASE};
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a database the migrator opens (and closes) itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseDescriptor {
    /// Fresh in-memory database
    Memory,
    /// SQLite database file, created if missing
    Path(PathBuf),
}

impl DatabaseDescriptor {
    /// Parse a path string, treating `:memory:` specially
    pub fn parse(path: &str) -> Self {
        if path == MEMORY_DATABASE {
            DatabaseDescriptor::Memory
        } else {
            DatabaseDescriptor::Path(PathBuf::from(path))
        }
    }

    /// Build from config, resolving relative paths against `root`
    pub fn from_config(config: &DatabaseConfig, root: &Path) -> Self {
        Self::parse(&config.path_absolute(root))
    }
}

impl fmt::Display for DatabaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDescriptor::Memory => write!(f, "{MEMORY_DATABASE}"),
            DatabaseDescriptor::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
