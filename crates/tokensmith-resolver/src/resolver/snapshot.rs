//! Whole-theme resolution for dumps and checks.

use super::TokenResolver;
use crate::table::{Token, DEFAULT_SUB_KEY};
use serde::Serialize;
use std::collections::BTreeMap;
use tokensmith_config::schema::DarkModeActivation;
use tokensmith_config::VariableSet;

/// Every token resolved against one variable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedTheme {
    pub mode: String,
    /// `media (prefers-color-scheme: dark)` or `selector .dark`.
    pub dark_mode: String,
    /// Keyed by flattened utility name.
    pub colors: BTreeMap<String, String>,
    pub border_radius: BTreeMap<String, String>,
    pub box_shadow: BTreeMap<String, String>,
    pub font_family: BTreeMap<String, String>,
    pub animation: BTreeMap<String, String>,
    pub errors: Vec<String>,
}

impl ResolvedTheme {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the resolved values as CSS custom properties on `:root`.
    pub fn to_css(&self) -> String {
        let mut lines = vec![":root {".to_string()];
        let groups = [
            ("color", &self.colors),
            ("radius", &self.border_radius),
            ("shadow", &self.box_shadow),
            ("font", &self.font_family),
        ];
        for (prefix, values) in groups {
            for (name, value) in values {
                lines.push(format!("  --{prefix}-{name}: {value};"));
            }
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

pub(super) fn resolve_all(resolver: &TokenResolver, vars: &VariableSet) -> ResolvedTheme {
    let table = resolver.table();
    let mut theme = ResolvedTheme {
        mode: vars.name().to_string(),
        dark_mode: match table.dark_mode().activation() {
            DarkModeActivation::MediaQuery(query) => format!("media {query}"),
            DarkModeActivation::AncestorSelector(selector) => format!("selector {selector}"),
        },
        ..Default::default()
    };

    for (name, token) in table.colors() {
        let keys: Vec<Option<String>> = match token {
            Token::Simple(_) => vec![None],
            Token::Composite(_) => token.sub_keys().into_iter().map(Some).collect(),
        };
        for key in keys {
            let class = match key.as_deref() {
                None | Some(DEFAULT_SUB_KEY) => name.to_string(),
                Some(key) => format!("{name}-{key}"),
            };
            // Shadowed by an earlier token with the same utility name.
            if table.utility(&class) != Some((name, key.as_deref())) {
                continue;
            }
            match resolver.resolve(vars, name, key.as_deref(), None) {
                Ok(color) => {
                    theme.colors.insert(class, color);
                }
                Err(e) => theme.errors.push(format!("colors.{class}: {e}")),
            }
        }
    }

    for (name, _) in table.scales() {
        match resolver.resolve_derived(vars, name) {
            Ok(value) => {
                theme.border_radius.insert(name.to_string(), value.to_string());
            }
            Err(e) => theme.errors.push(format!("border_radius.{name}: {e}")),
        }
    }

    for (name, shadow) in table.shadows() {
        theme.box_shadow.insert(name.to_string(), shadow.to_string());
    }

    for (name, _) in table.font_families() {
        match resolver.resolve_font_family(name) {
            Ok(value) => {
                theme.font_family.insert(name.to_string(), value);
            }
            Err(e) => theme.errors.push(format!("font_family.{name}: {e}")),
        }
    }

    for (name, _) in table.animations() {
        match resolver.resolve_animation(name) {
            Ok(binding) => {
                theme.animation.insert(name.to_string(), binding.css_value());
            }
            Err(e) => theme.errors.push(format!("animation.{name}: {e}")),
        }
    }

    theme
}
