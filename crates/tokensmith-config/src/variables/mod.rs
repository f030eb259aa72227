//! Base variable sets.
//!
//! A variable set is the snapshot of custom-property values a theme mode
//! provides (`--primary: 0.6 0.15 250`). Sets come from the built-in
//! light/dark tables, `[variables.<mode>]` config tables, and YAML files.

mod builtin;
mod loader;
mod types;

pub use builtin::{builtin_variable_set, BUILT_IN_VARIABLE_SETS};
pub use loader::{available_modes, load_variable_file, load_variable_set, variable_set_for};
pub use types::{normalize_variable_name, VariableSet, VariableSetFile};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokensmithConfig;
    use std::collections::BTreeMap;

    #[test]
    fn names_are_normalized() {
        let set = VariableSet::new("test", [("--primary", "0.6 0.15 250")]);
        assert_eq!(set.get("primary"), Some("0.6 0.15 250"));
        assert_eq!(set.get("--primary"), Some("0.6 0.15 250"));
        assert_eq!(set.get("secondary"), None);
    }

    #[test]
    fn builtin_sets_share_variable_names() {
        let light = builtin_variable_set("light").unwrap();
        let dark = builtin_variable_set("dark").unwrap();
        assert_eq!(light.name(), "light");
        assert_eq!(light.len(), dark.len());
        assert!(light.iter().all(|(k, _)| dark.get(k).is_some()));
        assert_ne!(light.get("background"), dark.get("background"));
        assert!(builtin_variable_set("sepia").is_none());
    }

    #[test]
    fn overlay_returns_new_set() {
        let base = VariableSet::new("light", [("primary", "0.2 0 0"), ("ring", "0.7 0 0")]);
        let overrides = VariableSet::new("brand", [("primary", "0.6 0.15 250")]);
        let merged = base.overlay(&overrides);

        assert_eq!(merged.name(), "brand");
        assert_eq!(merged.get("primary"), Some("0.6 0.15 250"));
        assert_eq!(merged.get("ring"), Some("0.7 0 0"));
        // base untouched
        assert_eq!(base.get("primary"), Some("0.2 0 0"));
    }

    #[test]
    fn with_does_not_mutate_original() {
        let base = VariableSet::new("light", [("radius", "8px")]);
        let next = base.with("--radius", "12px");
        assert_eq!(base.get("radius"), Some("8px"));
        assert_eq!(next.get("radius"), Some("12px"));
    }

    #[test]
    fn config_variables_layer_over_builtin() {
        let mut config = TokensmithConfig::default();
        config.variables.insert(
            "dark".into(),
            BTreeMap::from([("primary".to_string(), "0.7 0.2 280".to_string())]),
        );

        let dark = variable_set_for(&config, "dark").unwrap();
        assert_eq!(dark.get("primary"), Some("0.7 0.2 280"));
        assert_eq!(dark.get("background"), Some("0.145 0 0"));
    }

    #[test]
    fn custom_mode_without_builtin() {
        let mut config = TokensmithConfig::default();
        config.variables.insert(
            "contrast".into(),
            BTreeMap::from([("primary".to_string(), "0 0 0".to_string())]),
        );

        let set = variable_set_for(&config, "contrast").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(
            available_modes(&config),
            vec!["light", "dark", "contrast"]
        );
    }

    #[test]
    fn builtins_can_be_disabled() {
        let mut config = TokensmithConfig::default();
        config.resolution.builtin_variables = false;
        let err = variable_set_for(&config, "light").unwrap_err().to_string();
        assert!(err.contains("unknown variable set 'light'"));
        assert!(available_modes(&config).is_empty());
    }

    #[test]
    fn load_variable_set_from_yaml_with_extends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midnight.yaml");
        std::fs::write(
            &path,
            r#"
name: midnight
extends: dark
variables:
  "--primary": "0.7 0.2 280"
  radius: "12px"
"#,
        )
        .unwrap();

        let config = TokensmithConfig::default();
        let set = load_variable_set(&config, &path).unwrap();
        assert_eq!(set.name(), "midnight");
        assert_eq!(set.get("primary"), Some("0.7 0.2 280"));
        assert_eq!(set.get("radius"), Some("12px"));
        assert_eq!(set.get("background"), Some("0.145 0 0"));
    }

    #[test]
    fn variable_file_name_defaults_to_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocean.yml");
        std::fs::write(&path, "variables:\n  primary: \"0.5 0.1 220\"\n").unwrap();

        let config = TokensmithConfig::default();
        let set = variable_set_for(&config, path.to_str().unwrap()).unwrap();
        assert_eq!(set.name(), "ocean");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn self_extending_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.yaml");
        std::fs::write(
            &path,
            format!("extends: {}\nvariables: {{}}\n", path.display()),
        )
        .unwrap();

        let config = TokensmithConfig::default();
        let err = load_variable_set(&config, &path).unwrap_err().to_string();
        assert!(err.contains("levels of 'extends'"));
    }

    #[test]
    fn missing_variable_file_returns_error() {
        let config = TokensmithConfig::default();
        let result = variable_set_for(&config, "/tmp/definitely-missing-tokensmith.yaml");
        assert!(matches!(
            result,
            Err(tokensmith_common::ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn unknown_mode_lists_available() {
        let config = TokensmithConfig::default();
        let err = variable_set_for(&config, "definitely-not-a-mode")
            .unwrap_err()
            .to_string();
        assert!(err.contains("available: light, dark"));
    }
}
