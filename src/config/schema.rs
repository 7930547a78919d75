//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Tag prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "LogUtil/";

/// Root configuration for the logging facade.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Facade settings (prefix, initial switch state).
    pub facade: FacadeConfig,

    /// Settings for the tracing subscriber behind the default sink.
    pub observability: ObservabilityConfig,
}

/// Facade configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Prefix prepended to every caller-supplied tag.
    pub prefix: String,

    /// Pin the initial switch state. `None` follows the build profile.
    pub enabled: Option<bool>,
}

impl FacadeConfig {
    /// Initial value of the enable switch.
    ///
    /// Debug builds start enabled, release builds start disabled, unless
    /// `enabled` overrides it.
    pub fn initial_enabled(&self) -> bool {
        self.enabled.unwrap_or(cfg!(debug_assertions))
    }
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            enabled: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Colourise subscriber output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            ansi: true,
        }
    }
}
