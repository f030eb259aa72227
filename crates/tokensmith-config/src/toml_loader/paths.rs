//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use tokensmith_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Project-local config file name.
pub const CONFIG_FILE_NAME: &str = "tokensmith.toml";

/// Get the default config file path.
///
/// A `tokensmith.toml` in the working directory wins over the
/// platform-specific user config.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(local);
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("tokensmith").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
