//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LogConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LogConfig, ConfigError> {
    let config: LogConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let config = parse_config("").unwrap();
        assert_eq!(config.facade.prefix, "LogUtil/");
    }

    #[test]
    fn test_parse_full() {
        let config = parse_config(
            r#"
            [facade]
            prefix = "Camera/"
            enabled = true

            [observability]
            log_level = "warn"
            ansi = false
            "#,
        )
        .unwrap();

        assert_eq!(config.facade.prefix, "Camera/");
        assert_eq!(config.facade.enabled, Some(true));
        assert_eq!(config.observability.log_level, "warn");
        assert!(!config.observability.ansi);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[facade\nprefix = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_all() {
        let err = parse_config(
            r#"
            [facade]
            prefix = "bad\nprefix"

            [observability]
            log_level = "verbose"
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("logutil_test_load_from_file_{}.toml", std::process::id()));
        fs::write(&path, "[facade]\nprefix = \"Disk/\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.facade.prefix, "Disk/");

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("logutil_definitely_missing.toml");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }
}
