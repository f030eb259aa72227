//! Tests for config loading, creation, and path resolution.

use super::*;
use super::template::default_config_toml;
use crate::schema::{ColorEntry, DarkMode, TokensmithConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tokensmith_config.toml"));
    assert!(matches!(
        result,
        Err(tokensmith_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokensmith.toml");
    std::fs::write(
        &path,
        r##"
dark_mode = "media"

[theme.extend.colors]
brand = "oklch(var(--brand) / <alpha-value>)"

[variables.light]
brand = "0.6 0.15 250"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.dark_mode, DarkMode::Media);
    assert_eq!(config.theme.extend.colors.len(), 1);
    assert_eq!(config.variables["light"]["brand"], "0.6 0.15 250");
    // Defaults preserved
    assert_eq!(config.theme.extend.border_radius.len(), 3);
    assert_eq!(config.content.len(), 2);
}

#[test]
fn load_json_config_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokensmith.json");
    std::fs::write(
        &path,
        r#"{ "content": ["app/**/*.tsx"], "plugins": ["animate"] }"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.content, vec!["app/**/*.tsx"]);
    assert_eq!(config.plugins, vec!["animate"]);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokensmith.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tokensmith_common::ConfigError::ParseError(_)));
    assert!(err.to_string().contains("TOML"));
}

#[test]
fn load_config_with_dangling_animation_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokensmith.toml");
    std::fs::write(
        &path,
        r#"
[theme.extend.animation]
wiggle = "wiggle 1s ease-in-out infinite"
"#,
    )
    .unwrap();

    // Validation only warns on load; resolution reports the dangling reference.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.extend.animation.len(), 1);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokensmith").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.dark_mode, DarkMode::Class(None));
    assert_eq!(config.plugins.len(), 3);
}

#[test]
fn default_config_toml_matches_defaults() {
    let content = default_config_toml();
    let parsed: TokensmithConfig = toml::from_str(&content).unwrap();
    let defaults = TokensmithConfig::default();

    assert_eq!(parsed.content, defaults.content);
    assert_eq!(parsed.plugins, defaults.plugins);
    assert_eq!(parsed.theme.extend.colors, defaults.theme.extend.colors);
    assert_eq!(
        parsed.theme.extend.border_radius,
        defaults.theme.extend.border_radius
    );
    assert_eq!(
        parsed.theme.extend.box_shadow,
        defaults.theme.extend.box_shadow
    );
    assert_eq!(
        parsed.theme.extend.font_family,
        defaults.theme.extend.font_family
    );
    assert_eq!(parsed.theme.extend.keyframes, defaults.theme.extend.keyframes);
    assert_eq!(parsed.theme.extend.animation, defaults.theme.extend.animation);
    assert_eq!(
        parsed.theme.container.screens,
        defaults.theme.container.screens
    );
    assert!(parsed.variables.is_empty());
}

#[test]
fn template_chart_keys_are_strings() {
    let parsed: TokensmithConfig = toml::from_str(&default_config_toml()).unwrap();
    let ColorEntry::Composite(chart) = &parsed.theme.extend.colors["chart"] else {
        panic!("chart should be composite");
    };
    assert_eq!(chart["3"], "oklch(var(--chart-3))");
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tokensmith"));
        assert!(path_str.ends_with(".toml"));
    }
}
