//! Theme section: container definition and the extended token tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::colors::{default_colors, ColorEntry};

/// Keyframe set: stop selector → property → value.
pub type KeyframeStops = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    pub container: ContainerConfig,
    pub extend: ExtendConfig,
}

/// The `.container` utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Center the container with auto horizontal margins.
    pub center: bool,
    /// Horizontal padding (e.g. `2rem`).
    pub padding: String,
    /// Breakpoint name → max width.
    pub screens: BTreeMap<String, String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            center: true,
            padding: "2rem".into(),
            screens: BTreeMap::from([("2xl".to_string(), "1400px".to_string())]),
        }
    }
}

/// Token tables. Each table present in a config file replaces the default
/// table of the same name as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendConfig {
    pub colors: BTreeMap<String, ColorEntry>,
    #[serde(alias = "borderRadius")]
    pub border_radius: BTreeMap<String, String>,
    #[serde(alias = "boxShadow")]
    pub box_shadow: BTreeMap<String, String>,
    #[serde(alias = "fontFamily")]
    pub font_family: BTreeMap<String, Vec<String>>,
    pub keyframes: BTreeMap<String, KeyframeStops>,
    pub animation: BTreeMap<String, String>,
}

impl Default for ExtendConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            border_radius: string_map(&[
                ("lg", "var(--radius)"),
                ("md", "calc(var(--radius) - 2px)"),
                ("sm", "calc(var(--radius) - 4px)"),
            ]),
            box_shadow: string_map(&[
                ("xs", "0 1px 2px 0 rgba(0,0,0,0.05)"),
                ("soft", "0 2px 8px -2px rgba(0,0,0,0.1)"),
                ("medium", "0 4px 16px -4px rgba(0,0,0,0.15)"),
            ]),
            font_family: ["sans", "display"]
                .into_iter()
                .map(|name| (name.to_string(), default_font_stack()))
                .collect(),
            keyframes: default_keyframes(),
            animation: string_map(&[
                ("accordion-down", "accordion-down 0.2s ease-out"),
                ("accordion-up", "accordion-up 0.2s ease-out"),
                ("fade-in", "fade-in 0.5s ease-out"),
            ]),
        }
    }
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_font_stack() -> Vec<String> {
    [
        "Inter",
        "-apple-system",
        "BlinkMacSystemFont",
        "Segoe UI",
        "sans-serif",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_keyframes() -> BTreeMap<String, KeyframeStops> {
    let accordion = "var(--radix-accordion-content-height)";
    BTreeMap::from([
        (
            "accordion-down".to_string(),
            BTreeMap::from([
                ("from".to_string(), string_map(&[("height", "0")])),
                ("to".to_string(), string_map(&[("height", accordion)])),
            ]),
        ),
        (
            "accordion-up".to_string(),
            BTreeMap::from([
                ("from".to_string(), string_map(&[("height", accordion)])),
                ("to".to_string(), string_map(&[("height", "0")])),
            ]),
        ),
        (
            "fade-in".to_string(),
            BTreeMap::from([
                (
                    "from".to_string(),
                    string_map(&[("opacity", "0"), ("transform", "translateY(10px)")]),
                ),
                (
                    "to".to_string(),
                    string_map(&[("opacity", "1"), ("transform", "translateY(0)")]),
                ),
            ]),
        ),
    ])
}
