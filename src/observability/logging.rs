//! Structured logging setup.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber that receives `TracingSink` events
//! - Honour `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Initialization is explicit; a host that already installed a subscriber
//!   gets an error instead of a silent override

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::global::InitError;

/// Install the global tracing subscriber.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.ansi))
        .try_init()
        .map_err(|e| InitError::Subscriber(e.to_string()))?;

    tracing::debug!(log_level = %config.log_level, "Tracing subscriber installed");
    Ok(())
}
