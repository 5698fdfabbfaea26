//! Version identifier parsing for migration folder and script names.
//!
//! A name is "numbered" when it starts with one or more ASCII decimal digits.
//! The digit run is the version; everything after it (including any file
//! extension) is ignored. Names that do not start with digits, or whose digit
//! run does not fit in the persisted version cell, are "skipped".

use regex::Regex;
use std::sync::OnceLock;

/// Migration version number.
pub type Version = u32;

/// Largest version the SQLite `user_version` cell (a signed 32-bit integer)
/// can hold.
pub const MAX_VERSION: Version = i32::MAX as Version;

static VERSION_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn version_prefix_re() -> &'static Regex {
    VERSION_PREFIX_RE.get_or_init(|| Regex::new(r"^[0-9]+").expect("valid regex literal"))
}

/// Outcome of classifying an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Name carries a usable version prefix
    Numbered(Version),
    /// Name has no leading digits, or they overflow [`MAX_VERSION`]
    Skipped,
}

impl Classification {
    /// The version, if numbered
    pub fn version(self) -> Option<Version> {
        match self {
            Classification::Numbered(v) => Some(v),
            Classification::Skipped => None,
        }
    }
}

/// Extract the leading integer from `name`.
///
/// `"007_init.sql"` yields `Some(7)`; `"README.md"` and `"v2"` yield `None`.
pub fn parse_version_prefix(name: &str) -> Option<Version> {
    let digits = version_prefix_re().find(name)?;
    let value: Version = digits.as_str().parse().ok()?;
    (value <= MAX_VERSION).then_some(value)
}

/// Classify `name` as numbered or skipped.
pub fn classify(name: &str) -> Classification {
    match parse_version_prefix(name) {
        Some(v) => Classification::Numbered(v),
        None => Classification::Skipped,
    }
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
