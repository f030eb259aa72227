//! Core config loading: read from path or platform default.

use crate::schema::TokensmithConfig;
use crate::validation;
use std::path::Path;
use tokensmith_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config text. `.json` paths are read as JSON, everything else as TOML.
pub fn parse_config(content: &str, path: &Path) -> Result<TokensmithConfig, ConfigError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))
    } else {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
    }
}

/// Load config from a specific file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<TokensmithConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_config(&content, path)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the default path.
///
/// Prefers `./tokensmith.toml`; otherwise uses the platform config
/// directory (`~/.config/tokensmith/config.toml` on Linux). If that file
/// does not exist, it is created from the template and defaults are returned.
pub fn load_default() -> Result<TokensmithConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TokensmithConfig::default())
        }
        Err(e) => Err(e),
    }
}
