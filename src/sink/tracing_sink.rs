//! Default sink: forwards records as `tracing` events.
//!
//! # Fields
//! - `tag`: composite tag (prefix + caller tag)
//! - `message`: record body
//! - `error`: display of the attached cause (cause records only)
//! - `cause_kind`: "Exception" or "Error" (cause records only)
//! - `trace`: source chain plus backtrace, if one was captured

use crate::sink::record::{Level, LogRecord};
use crate::sink::LogSink;

/// Sink that emits `tracing` events under the `logutil` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let tag = record.tag.as_str();
        let message = record.message.as_str();

        match (&record.cause, record.level) {
            (None, Level::Debug) => {
                tracing::debug!(target: "logutil", tag, "{}", message);
            }
            (None, Level::Error) => {
                tracing::error!(target: "logutil", tag, "{}", message);
            }
            (Some(cause), Level::Debug) => {
                tracing::debug!(
                    target: "logutil",
                    tag,
                    error = %cause,
                    cause_kind = cause.label(),
                    trace = %cause.render_trace(),
                    "{}",
                    message
                );
            }
            (Some(cause), Level::Error) => {
                tracing::error!(
                    target: "logutil",
                    tag,
                    error = %cause,
                    cause_kind = cause.label(),
                    trace = %cause.render_trace(),
                    "{}",
                    message
                );
            }
        }
    }
}
