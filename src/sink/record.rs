//! Record type handed to sinks.

use std::fmt;

use crate::facade::Cause;

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Error,
}

impl Level {
    /// Equivalent `tracing` level.
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => f.write_str("DEBUG"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

/// A single log record.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Severity.
    pub level: Level,
    /// Composite tag: facade prefix followed by the caller's tag.
    pub tag: String,
    /// Record body. For cause records this is the cause's label.
    pub message: String,
    /// Attached cause, shared with the caller.
    pub cause: Option<Cause>,
}

impl LogRecord {
    pub fn new(level: Level, tag: String, message: String) -> Self {
        Self {
            level,
            tag,
            message,
            cause: None,
        }
    }

    /// Attach a cause.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }
}
