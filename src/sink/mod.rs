//! Sinks: where gated records end up.
//!
//! # Data Flow
//! ```text
//! LogFacade (gate passed)
//!     → LogRecord { level, tag, message, cause }
//!     → LogSink::emit (tracing events by default)
//!
//! LogFacade::console_print / toggle
//!     → Console::print_line (stdout by default)
//! ```
//!
//! # Design Decisions
//! - Fire-and-forget: neither trait returns a Result, sink failures stay
//!   inside the sink
//! - Traits are object safe so facades hold `Arc<dyn ...>` and tests can
//!   inject recorders

pub mod console;
pub mod record;
pub mod tracing_sink;

pub use console::{Console, StdoutConsole};
pub use record::{Level, LogRecord};
pub use tracing_sink::TracingSink;

/// Destination for records that passed the gate.
pub trait LogSink: Send + Sync {
    /// Deliver a record. Must not panic on delivery failure.
    fn emit(&self, record: &LogRecord);
}

impl<F> LogSink for F
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn emit(&self, record: &LogRecord) {
        self(record)
    }
}
