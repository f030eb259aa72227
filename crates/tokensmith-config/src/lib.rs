//! tokensmith configuration system.
//!
//! Loads the design-token configuration (dark-mode strategy, content
//! globs, theme token tables, plugin list), the base variable sets each
//! theme mode provides, and validates the result. All config sections use
//! the reference theme as defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tokensmith_config::{load_config, variables::variable_set_for};
//!
//! let config = load_config().expect("failed to load config");
//! let dark = variable_set_for(&config, "dark").expect("no dark variables");
//! println!("{} variables", dark.len());
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod variables;
pub mod watcher;

// Re-export core types for convenience
pub use reload::{ReloadManager, Reloaded};
pub use schema::{TokensmithConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::save_config_to_path;
pub use variables::{VariableSet, BUILT_IN_VARIABLE_SETS};
pub use watcher::ConfigWatcher;

use std::path::Path;
use tokensmith_common::ConfigError;

/// Load config from the default path and validate it.
///
/// Uses `./tokensmith.toml` when present, otherwise the platform config
/// file (created with defaults if missing).
pub fn load_config() -> Result<TokensmithConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<TokensmithConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TokensmithConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = TokensmithConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"dark_mode\""));
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"container\""));
        assert!(json.contains("\"colors\""));
        assert!(json.contains("\"border_radius\""));
        assert!(json.contains("\"box_shadow\""));
        assert!(json.contains("\"font_family\""));
        assert!(json.contains("\"keyframes\""));
        assert!(json.contains("\"animation\""));
        assert!(json.contains("\"plugins\""));
        assert!(json.contains("\"resolution\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = TokensmithConfig::default();
        let json = config_to_json(&config);
        let parsed: TokensmithConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.content, config.content);
        assert_eq!(parsed.dark_mode, config.dark_mode);
        assert_eq!(parsed.theme.extend.colors, config.theme.extend.colors);
    }

    #[test]
    fn load_config_from_missing_path() {
        let err = load_config_from(Path::new("/tmp/no-such-tokensmith.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokensmith.toml");
        std::fs::write(&path, "content = []\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
