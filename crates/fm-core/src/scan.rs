//! Directory scanning into ordered, duplicate-free version maps.
//!
//! A scan lists the immediate children of one directory, keeps those of the
//! requested [`EntryKind`] whose names carry a version prefix, and inserts
//! them into a [`VersionMap`]. Insertion fails on a repeated version, so
//! duplicates are caught no matter what order the filesystem lists entries in.

use crate::error::{CoreError, CoreResult};
use crate::identifier::{classify, Classification, Version};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of filesystem entry a scan collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Version folder under the migrations root
    Folder,
    /// Script file inside a version folder
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Folder => write!(f, "folder"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// A directory entry as listed, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ListedEntry {
    /// Build an entry whose path is `directory/name`
    pub fn new(directory: &Path, name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            path: directory.join(&name),
            name,
            kind,
        }
    }
}

/// A numbered folder or file discovered by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationItem {
    /// Version parsed from the leading digits of `name`
    pub version: Version,
    /// Entry name as found on disk
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Version-keyed items from one directory, iterated in ascending order.
#[derive(Debug, Clone)]
pub struct VersionMap {
    directory: PathBuf,
    items: BTreeMap<Version, MigrationItem>,
}

impl VersionMap {
    /// Create an empty map for items found in `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            items: BTreeMap::new(),
        }
    }

    /// Insert `item`, failing if its version is already present.
    pub fn insert(&mut self, item: MigrationItem) -> CoreResult<()> {
        match self.items.entry(item.version) {
            btree_map::Entry::Occupied(existing) => Err(CoreError::DuplicateVersionIdentifier {
                directory: self.directory.display().to_string(),
                version: item.version,
                first: existing.get().name.clone(),
                second: item.name,
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// Directory the items were found in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, version: Version) -> Option<&MigrationItem> {
        self.items.get(&version)
    }

    /// Items in ascending version order
    pub fn iter(&self) -> impl Iterator<Item = &MigrationItem> {
        self.items.values()
    }

    /// Versions in ascending order
    pub fn versions(&self) -> impl Iterator<Item = Version> + '_ {
        self.items.keys().copied()
    }

    /// Highest version in the map
    pub fn max_version(&self) -> Option<Version> {
        self.items.keys().next_back().copied()
    }
}

impl<'a> IntoIterator for &'a VersionMap {
    type Item = &'a MigrationItem;
    type IntoIter = btree_map::Values<'a, Version, MigrationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

/// Build a [`VersionMap`] from already-listed entries.
///
/// Entries of a different kind and names without a version prefix are
/// dropped. The first repeated version aborts with
/// [`CoreError::DuplicateVersionIdentifier`].
pub fn build_version_map<I>(
    directory: &Path,
    entries: I,
    kind: EntryKind,
) -> CoreResult<VersionMap>
where
    I: IntoIterator<Item = ListedEntry>,
{
    let mut map = VersionMap::new(directory);
    for entry in entries {
        if entry.kind != kind {
            continue;
        }
        let version = match classify(&entry.name) {
            Classification::Numbered(v) => v,
            Classification::Skipped => {
                log::debug!("Skipping unnumbered {} '{}'", kind, entry.path.display());
                continue;
            }
        };
        map.insert(MigrationItem {
            version,
            name: entry.name,
            path: entry.path,
            kind,
        })?;
    }
    Ok(map)
}

/// Scan the immediate children of `path` for numbered entries of `kind`.
///
/// Never recurses. Fails with [`CoreError::PathNotFound`] when `path` is
/// missing, not a directory, or cannot be listed.
pub fn scan_directory(path: &Path, kind: EntryKind) -> CoreResult<VersionMap> {
    let not_found = || CoreError::PathNotFound {
        path: path.display().to_string(),
    };
    if !path.is_dir() {
        return Err(not_found());
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path).map_err(|_| not_found())? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let entry_path = entry.path();
        let entry_kind = if entry_path.is_dir() {
            EntryKind::Folder
        } else if entry_path.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::debug!("Skipping non-UTF-8 entry name '{}'", entry_path.display());
            continue;
        };
        entries.push(ListedEntry {
            name,
            path: entry_path,
            kind: entry_kind,
        });
    }

    build_version_map(path, entries, kind)
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
