//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject prefixes that would break single-line log output
//! - Check the log level names a real level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::LogConfig;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Prefix contains a control character (newline, tab, ...).
    #[error("facade.prefix contains control characters: {0:?}")]
    PrefixControlChars(String),

    /// Log level is not one of trace/debug/info/warn/error.
    #[error("observability.log_level '{0}' is not a valid level")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.facade.prefix;
    if prefix.chars().any(char::is_control) {
        errors.push(ValidationError::PrefixControlChars(prefix.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
