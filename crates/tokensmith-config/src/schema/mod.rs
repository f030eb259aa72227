//! Configuration schema types for tokensmith.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the reference theme.

mod colors;
mod dark_mode;
mod resolution;
mod theme;

pub use colors::*;
pub use dark_mode::*;
pub use resolution::*;
pub use theme::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Plugins enabled by default, in registration order.
pub const DEFAULT_PLUGINS: &[&str] = &["typography", "container-queries", "animate"];

/// Root configuration.
///
/// Mirrors a utility-class generator config: dark-mode strategy, content
/// globs, theme tables and plugin list, plus the base variable overrides
/// and resolution settings this crate adds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensmithConfig {
    #[serde(alias = "darkMode")]
    pub dark_mode: DarkMode,
    /// Globs selecting the files scanned for utility-class usage.
    pub content: Vec<String>,
    pub plugins: Vec<String>,
    pub theme: ThemeSection,
    /// Mode name → variable name → value. Layered over the built-in set of
    /// the same name.
    pub variables: BTreeMap<String, BTreeMap<String, String>>,
    pub resolution: ResolutionConfig,
}

impl Default for TokensmithConfig {
    fn default() -> Self {
        Self {
            dark_mode: DarkMode::default(),
            content: vec![
                "index.html".into(),
                "src/**/*.{js,ts,jsx,tsx,html,css}".into(),
            ],
            plugins: DEFAULT_PLUGINS.iter().map(|p| p.to_string()).collect(),
            theme: ThemeSection::default(),
            variables: BTreeMap::new(),
            resolution: ResolutionConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_reference_content() {
        let config = TokensmithConfig::default();
        assert_eq!(
            config.content,
            vec!["index.html", "src/**/*.{js,ts,jsx,tsx,html,css}"]
        );
        assert_eq!(
            config.plugins,
            vec!["typography", "container-queries", "animate"]
        );
        assert_eq!(config.dark_mode, DarkMode::Class(None));
    }

    #[test]
    fn default_colors_preserve_alpha_support_per_token() {
        let colors = TokensmithConfig::default().theme.extend.colors;
        assert_eq!(colors.len(), 16);
        assert_eq!(colors["border"], ColorEntry::simple("oklch(var(--border))"));
        assert_eq!(
            colors["ring"],
            ColorEntry::simple("oklch(var(--ring) / <alpha-value>)")
        );
        assert_eq!(
            colors["primary"],
            ColorEntry::composite(&[
                ("DEFAULT", "oklch(var(--primary) / <alpha-value>)"),
                ("foreground", "oklch(var(--primary-foreground))"),
            ])
        );
        assert_eq!(
            colors["muted"],
            ColorEntry::composite(&[
                ("DEFAULT", "oklch(var(--muted) / <alpha-value>)"),
                ("foreground", "oklch(var(--muted-foreground) / <alpha-value>)"),
            ])
        );
        assert_eq!(
            colors["card"],
            ColorEntry::composite(&[
                ("DEFAULT", "oklch(var(--card))"),
                ("foreground", "oklch(var(--card-foreground))"),
            ])
        );
    }

    #[test]
    fn default_composites_have_expected_sub_keys() {
        let colors = TokensmithConfig::default().theme.extend.colors;
        let ColorEntry::Composite(chart) = &colors["chart"] else {
            panic!("chart should be composite");
        };
        assert_eq!(
            chart.keys().collect::<Vec<_>>(),
            vec!["1", "2", "3", "4", "5"]
        );
        assert!(!chart.contains_key("DEFAULT"));

        let ColorEntry::Composite(sidebar) = &colors["sidebar"] else {
            panic!("sidebar should be composite");
        };
        assert_eq!(sidebar.len(), 8);
        assert_eq!(
            sidebar["primary-foreground"],
            "oklch(var(--sidebar-primary-foreground))"
        );
    }

    #[test]
    fn default_scales_and_motion() {
        let extend = TokensmithConfig::default().theme.extend;
        assert_eq!(extend.border_radius["lg"], "var(--radius)");
        assert_eq!(extend.border_radius["sm"], "calc(var(--radius) - 4px)");
        assert_eq!(extend.box_shadow.len(), 3);
        assert_eq!(extend.font_family["sans"][3], "Segoe UI");
        assert_eq!(extend.keyframes.len(), 3);
        assert_eq!(extend.keyframes["fade-in"]["to"]["opacity"], "1");
        assert_eq!(extend.animation["fade-in"], "fade-in 0.5s ease-out");
    }

    #[test]
    fn default_container() {
        let container = TokensmithConfig::default().theme.container;
        assert!(container.center);
        assert_eq!(container.padding, "2rem");
        assert_eq!(container.screens["2xl"], "1400px");
    }

    #[test]
    fn default_resolution() {
        let resolution = ResolutionConfig::default();
        assert_eq!(resolution.rem_base_px, 16.0);
        assert_eq!(resolution.default_mode, "light");
        assert!(resolution.builtin_variables);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: TokensmithConfig = toml::from_str(
            r#"
content = ["app/**/*.rs"]

[theme.extend.border_radius]
xl = "calc(var(--radius) + 4px)"
"#,
        )
        .unwrap();
        assert_eq!(config.content, vec!["app/**/*.rs"]);
        assert_eq!(config.theme.extend.border_radius.len(), 1);
        assert_eq!(config.theme.extend.colors.len(), 16);
        assert_eq!(config.plugins.len(), 3);
    }

    #[test]
    fn json_config_accepts_camel_case_keys() {
        let config: TokensmithConfig = serde_json::from_str(
            r#"{
                "darkMode": ["class"],
                "theme": {
                    "extend": {
                        "borderRadius": { "lg": "var(--radius)" },
                        "fontFamily": { "mono": ["JetBrains Mono", "monospace"] },
                        "colors": {
                            "brand": { "DEFAULT": "oklch(var(--brand) / <alpha-value>)" }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.theme.extend.border_radius.len(), 1);
        assert_eq!(config.theme.extend.font_family["mono"][0], "JetBrains Mono");
        assert!(matches!(
            config.theme.extend.colors["brand"],
            ColorEntry::Composite(_)
        ));
    }
}
