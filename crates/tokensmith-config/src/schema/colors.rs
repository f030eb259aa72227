//! Color token table types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the `colors` table: a single expression or a map of
/// sub-keys (`DEFAULT`, `foreground`, ...) to expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Simple(String),
    Composite(BTreeMap<String, String>),
}

impl ColorEntry {
    pub fn simple(expr: &str) -> Self {
        ColorEntry::Simple(expr.to_string())
    }

    pub fn composite(entries: &[(&str, &str)]) -> Self {
        ColorEntry::Composite(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

fn opaque(var: &str) -> String {
    format!("oklch(var(--{var}))")
}

fn translucent(var: &str) -> String {
    format!("oklch(var(--{var}) / <alpha-value>)")
}

/// The reference color table.
///
/// Which roles accept an opacity modifier is deliberate per token:
/// `border`, `input`, `card`, `popover` and friends stay opaque.
pub fn default_colors() -> BTreeMap<String, ColorEntry> {
    let mut colors = BTreeMap::new();

    for name in ["border", "input", "background", "foreground"] {
        colors.insert(name.to_string(), ColorEntry::Simple(opaque(name)));
    }
    colors.insert("ring".into(), ColorEntry::Simple(translucent("ring")));

    for name in ["primary", "secondary", "destructive", "accent"] {
        colors.insert(
            name.to_string(),
            ColorEntry::Composite(BTreeMap::from([
                ("DEFAULT".to_string(), translucent(name)),
                ("foreground".to_string(), opaque(&format!("{name}-foreground"))),
            ])),
        );
    }
    colors.insert(
        "muted".into(),
        ColorEntry::Composite(BTreeMap::from([
            ("DEFAULT".to_string(), translucent("muted")),
            ("foreground".to_string(), translucent("muted-foreground")),
        ])),
    );
    for name in ["popover", "card", "success", "warning"] {
        colors.insert(
            name.to_string(),
            ColorEntry::Composite(BTreeMap::from([
                ("DEFAULT".to_string(), opaque(name)),
                ("foreground".to_string(), opaque(&format!("{name}-foreground"))),
            ])),
        );
    }

    colors.insert(
        "chart".into(),
        ColorEntry::Composite(
            (1..=5)
                .map(|i| (i.to_string(), opaque(&format!("chart-{i}"))))
                .collect(),
        ),
    );

    let mut sidebar = BTreeMap::from([("DEFAULT".to_string(), opaque("sidebar"))]);
    for key in [
        "foreground",
        "primary",
        "primary-foreground",
        "accent",
        "accent-foreground",
        "border",
        "ring",
    ] {
        sidebar.insert(key.to_string(), opaque(&format!("sidebar-{key}")));
    }
    colors.insert("sidebar".into(), ColorEntry::Composite(sidebar));

    colors
}
