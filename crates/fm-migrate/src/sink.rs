//! Pluggable log sink for migration lifecycle events.
//!
//! The migrator reports every decision (folders found, versions skipped or
//! applied, scripts started and finished, errors) to a [`LogSink`]. The
//! default [`NoopSink`] discards everything, so the migrator never has to
//! check whether a sink is present.

use std::fmt;

/// Severity of a migration event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Information,
    Warning,
    Error,
}

impl Severity {
    /// Matching `log` crate level
    pub fn as_log_level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Information => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Information => write!(f, "information"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Receiver for migration events
pub trait LogSink {
    fn log(&self, severity: Severity, message: &str);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _severity: Severity, _message: &str) {}
}

/// Sink that forwards events to the `log` facade under the `fm_migrate` target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn log(&self, severity: Severity, message: &str) {
        log::log!(target: "fm_migrate", severity.as_log_level(), "{message}");
    }
}

impl<F> LogSink for F
where
    F: Fn(Severity, &str),
{
    fn log(&self, severity: Severity, message: &str) {
        self(severity, message)
    }
}
