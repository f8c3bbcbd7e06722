//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::FrontendConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `backend.base_address`.
pub const SERVER_ADDRESS_ENV: &str = "SERVER_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// If `SERVER_ADDRESS` is set in the environment it takes precedence over
/// the file's `backend.base_address`.
pub fn load_config(path: &Path) -> Result<FrontendConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: FrontendConfig = toml::from_str(&content)?;
    finish(config)
}

/// Defaults plus the environment override, for running without a file.
pub fn default_config() -> Result<FrontendConfig, ConfigError> {
    finish(FrontendConfig::default())
}

fn finish(mut config: FrontendConfig) -> Result<FrontendConfig, ConfigError> {
    if let Ok(addr) = std::env::var(SERVER_ADDRESS_ENV) {
        config.backend.base_address = addr;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: FrontendConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: FrontendConfig = toml::from_str(
            r#"
            [backend]
            base_address = "http://10.0.0.5:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_address, "http://10.0.0.5:9000");
        assert_eq!(config.timeouts.connect_secs, 5);
    }
}
