//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ApiKey, BridgeConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `quote_service.api_key`.
pub const API_KEY_ENV_VAR: &str = "BRIDGE_API_KEY";

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

/// Command-line values that take precedence over the file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub wallets_file: Option<String>,
    pub log_level: Option<String>,
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied before validation, so a file without
/// an API key is accepted when `BRIDGE_API_KEY` is set.
pub fn load_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    resolve_config(Some(path), CliOverrides::default())
}

/// Build the effective configuration: file (or defaults), then environment,
/// then command-line overrides. Validation runs once, on the final result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: CliOverrides,
) -> Result<BridgeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => BridgeConfig::default(),
    };

    apply_env_overrides(&mut config);
    if let Some(wallets_file) = overrides.wallets_file {
        config.wallets_file = wallets_file;
    }
    if let Some(log_level) = overrides.log_level {
        config.observability.log_level = log_level;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment variable overrides.
pub fn apply_env_overrides(config: &mut BridgeConfig) {
    if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
        if !key.trim().is_empty() {
            config.quote_service.api_key = ApiKey::new(key.trim());
        }
    }
}
