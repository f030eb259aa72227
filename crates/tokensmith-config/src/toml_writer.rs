//! Write a fully expanded TokensmithConfig to TOML.
//!
//! Writes go to a hidden sibling file first and are renamed into place, so
//! a watcher never observes a half-written config.

use std::path::{Path, PathBuf};

use tokensmith_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::{TokensmithConfig, CONFIG_SCHEMA_VERSION};

/// Serialize a config with every default spelled out.
pub fn render_config_toml(config: &TokensmithConfig) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;
    Ok(format!(
        "# tokensmith configuration (schema version {CONFIG_SCHEMA_VERSION})\n\n{body}"
    ))
}

/// Write config to `path`, creating parent directories as needed.
pub fn save_config_to_path(config: &TokensmithConfig, path: &Path) -> Result<(), ConfigError> {
    let content = render_config_toml(config)?;
    let write_err = |target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write config to {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    let staging = staging_path(path);
    std::fs::write(&staging, &content).map_err(|e| write_err(&staging, e))?;

    if let Err(e) = std::fs::rename(&staging, path) {
        // Some platforms refuse to rename over an open file.
        warn!("rename into {} failed ({e}), writing in place", path.display());
        let _ = std::fs::remove_file(&staging);
        std::fs::write(path, &content).map_err(|e| write_err(path, e))?;
    }

    debug!(path = %path.display(), bytes = content.len(), "config written");
    Ok(())
}

/// `dir/tokensmith.toml` stages as `dir/.tokensmith.toml.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DarkMode;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokensmith.toml");

        let config = TokensmithConfig::default();
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# tokensmith configuration (schema version 1)"));
        let parsed: TokensmithConfig = toml::from_str(&contents).unwrap();

        assert_eq!(parsed.dark_mode, config.dark_mode);
        assert_eq!(parsed.content, config.content);
        assert_eq!(parsed.plugins, config.plugins);
        assert_eq!(parsed.theme.extend.colors, config.theme.extend.colors);
        assert_eq!(parsed.theme.extend.keyframes, config.theme.extend.keyframes);
        assert_eq!(parsed.resolution.rem_base_px, config.resolution.rem_base_px);
    }

    #[test]
    fn save_config_preserves_variables_and_dark_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokensmith.toml");

        let mut config = TokensmithConfig::default();
        config.dark_mode = DarkMode::Selector(Some("[data-theme='dark']".into()));
        config.variables.insert(
            "dark".into(),
            BTreeMap::from([("primary".to_string(), "0.7 0.15 250".to_string())]),
        );

        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: TokensmithConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.dark_mode, config.dark_mode);
        assert_eq!(parsed.variables["dark"]["primary"], "0.7 0.15 250");
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("tokensmith.toml");

        save_config_to_path(&TokensmithConfig::default(), &path).unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("accordion-down"));
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokensmith.toml");

        save_config_to_path(&TokensmithConfig::default(), &path).unwrap();

        assert!(!staging_path(&path).exists());
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
