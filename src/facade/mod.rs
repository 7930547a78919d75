//! The gated logging facade.
//!
//! # Responsibilities
//! - Hold the process-wide enable switch
//! - Compose tags from the fixed prefix and caller tags
//! - Forward records to the sink and lines to the console when enabled
//!
//! # Gate
//! ```text
//! debug / error / error_cause / console_print
//!     → flag off: return, nothing reaches sink or console
//!     → flag on:  one record (or one console line)
//!
//! toggle
//!     → flip flag
//!     → announce new value on the console (never gated)
//! ```
//!
//! # Design Decisions
//! - Every operation is total; nothing here returns an error
//! - Sink and console are injected, defaults are tracing + stdout
//! - Causes are shared by `Arc` so sinks see the caller's object

pub mod cause;
pub mod flag;
pub mod logger;

pub use cause::{Cause, CauseKind};
pub use flag::EnableFlag;
pub use logger::LogFacade;
