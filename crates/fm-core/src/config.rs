//! Configuration types and parsing for foldermig.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file names probed by [`Config::load_from_dir`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["foldermig.yml", "foldermig.yaml"];

/// Database path understood as a fresh in-memory database
pub const MEMORY_DATABASE: &str = ":memory:";

const DEFAULT_DATABASE_PATH: &str = "app.db";
const DEFAULT_MIGRATIONS_PATH: &str = "migrations";

/// Project configuration from foldermig.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database the migrations are applied to
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Root directory holding the numbered version folders
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,

    /// Named target overrides (e.g., dev, prod)
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

/// Target-specific configuration overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Database configuration override
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Migrations root override
    #[serde(default)]
    pub migrations_path: Option<String>,
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether this points at an in-memory database
    pub fn is_memory(&self) -> bool {
        self.path == MEMORY_DATABASE
    }

    /// Resolve the path against `root`, leaving `:memory:` and absolute
    /// paths untouched.
    pub fn path_absolute(&self, root: &Path) -> String {
        if self.is_memory() || Path::new(&self.path).is_absolute() {
            self.path.clone()
        } else {
            root.join(&self.path).display().to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            migrations_path: default_migrations_path(),
            targets: HashMap::new(),
        }
    }
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_migrations_path() -> String {
    DEFAULT_MIGRATIONS_PATH.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for foldermig.yml or foldermig.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Like [`Config::load_from_dir`], but falls back to defaults when the
    /// directory has no config file.
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }
        if self.migrations_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_path cannot be empty".to_string(),
            });
        }
        for (name, target) in &self.targets {
            let empty_db = target
                .database
                .as_ref()
                .is_some_and(|db| db.path.trim().is_empty());
            let empty_migrations = target
                .migrations_path
                .as_ref()
                .is_some_and(|p| p.trim().is_empty());
            if empty_db || empty_migrations {
                return Err(CoreError::ConfigInvalid {
                    message: format!("target '{name}' overrides a path with an empty value"),
                });
            }
        }
        Ok(())
    }

    fn target(&self, name: &str) -> CoreResult<&TargetConfig> {
        self.targets.get(name).ok_or_else(|| {
            let mut available: Vec<&str> = self.targets.keys().map(String::as_str).collect();
            available.sort_unstable();
            CoreError::ConfigInvalid {
                message: format!(
                    "unknown target '{name}' (available: {})",
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                ),
            }
        })
    }

    /// Database config with the named target's override applied
    pub fn database_for(&self, target: Option<&str>) -> CoreResult<DatabaseConfig> {
        match target {
            Some(name) => Ok(self
                .target(name)?
                .database
                .clone()
                .unwrap_or_else(|| self.database.clone())),
            None => Ok(self.database.clone()),
        }
    }

    /// Migrations root with the named target's override applied
    pub fn migrations_path_for(&self, target: Option<&str>) -> CoreResult<&str> {
        match target {
            Some(name) => Ok(self
                .target(name)?
                .migrations_path
                .as_deref()
                .unwrap_or(&self.migrations_path)),
            None => Ok(&self.migrations_path),
        }
    }

    /// Migrations root resolved against the project root
    pub fn migrations_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
