//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LogFacade
//!     → TracingSink (tracing events, target "logutil")
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout / stderr of the host process
//! ```

pub mod logging;

pub use logging::init_tracing;
