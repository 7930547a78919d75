//! Gated logging facade.
//!
//! One process-wide switch decides whether `debug`, `error`, `error_cause`
//! and `console_print` do anything. The switch starts on in debug builds and
//! off in release builds, and only `toggle` changes it afterwards. Records
//! carry a fixed prefix plus the caller's tag and go to a `tracing` sink by
//! default.
//!
//! ```no_run
//! logutil::debug(Some("Camera"), "preview started");
//! logutil::toggle();
//! ```

pub mod config;
pub mod facade;
pub mod global;
pub mod observability;
pub mod sink;

pub use config::{FacadeConfig, LogConfig};
pub use facade::{Cause, CauseKind, LogFacade};
pub use global::{
    console_print, debug, error, error_cause, init, install, is_enabled, toggle, InitError,
};
pub use sink::{Console, Level, LogRecord, LogSink, StdoutConsole, TracingSink};
