//! Process-wide facade and its static-style API.
//!
//! The first call to any function here lazily builds a facade from
//! `FacadeConfig::default()` unless `install` or `init` ran before.

use std::sync::OnceLock;

use thiserror::Error;

use crate::config::{FacadeConfig, LogConfig};
use crate::facade::{Cause, LogFacade};
use crate::observability::init_tracing;

static FACADE: OnceLock<LogFacade> = OnceLock::new();

/// Errors from one-time process setup.
#[derive(Debug, Error)]
pub enum InitError {
    /// A global facade was already installed or lazily created.
    #[error("global log facade already installed")]
    AlreadyInstalled,

    /// The tracing subscriber could not be installed.
    #[error("tracing subscriber init failed: {0}")]
    Subscriber(String),
}

/// Install `facade` as the process-wide facade.
pub fn install(facade: LogFacade) -> Result<(), InitError> {
    FACADE.set(facade).map_err(|_| InitError::AlreadyInstalled)
}

/// Install a facade built from `config`, then initialize tracing.
///
/// Returns `AlreadyInstalled` without touching tracing if a facade exists.
/// A subscriber already set by the host is kept: the facade stays installed
/// and its events go to the host's subscriber.
pub fn init(config: &LogConfig) -> Result<(), InitError> {
    install(LogFacade::new(&config.facade))?;

    match init_tracing(&config.observability) {
        Ok(()) => {}
        Err(InitError::Subscriber(reason)) => {
            tracing::debug!(%reason, "Keeping existing tracing subscriber");
        }
        Err(e) => return Err(e),
    }

    tracing::debug!(
        prefix = %config.facade.prefix,
        enabled = is_enabled(),
        "Log facade installed"
    );
    Ok(())
}

/// The process-wide facade.
pub fn facade() -> &'static LogFacade {
    FACADE.get_or_init(|| LogFacade::new(&FacadeConfig::default()))
}

/// Flip the global switch; announces the new value on stdout.
pub fn toggle() -> bool {
    facade().toggle()
}

pub fn debug(tag: Option<&str>, message: &str) {
    facade().debug(tag, message);
}

pub fn error(tag: Option<&str>, message: &str) {
    facade().error(tag, message);
}

pub fn error_cause(tag: Option<&str>, cause: &Cause) {
    facade().error_cause(tag, cause);
}

pub fn console_print(message: &str) {
    facade().console_print(message);
}

pub fn is_enabled() -> bool {
    facade().is_enabled()
}
