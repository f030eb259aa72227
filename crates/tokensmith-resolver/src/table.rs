//! The immutable token table built from a validated config.
//!
//! Every expression is parsed here once; resolution only evaluates them
//! against a variable snapshot.

use crate::expr::{ColorExpr, DimensionExpr};
use crate::keyframes::Keyframes;
use std::collections::BTreeMap;
use tokensmith_common::{AnimationShorthand, ConfigError};
use tokensmith_config::schema::{ColorEntry, ContainerConfig, DarkMode};
use tokensmith_config::TokensmithConfig;
use tracing::{debug, warn};

/// Sub-key that maps a composite token to its bare utility name.
pub const DEFAULT_SUB_KEY: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Simple(ColorExpr),
    Composite(BTreeMap<String, ColorExpr>),
}

impl Token {
    pub fn sub_keys(&self) -> Vec<String> {
        match self {
            Token::Simple(_) => Vec::new(),
            Token::Composite(entries) => entries.keys().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenTable {
    colors: BTreeMap<String, Token>,
    /// Flattened utility name to (token, sub-key).
    utilities: BTreeMap<String, (String, Option<String>)>,
    scales: BTreeMap<String, DimensionExpr>,
    shadows: BTreeMap<String, String>,
    fonts: BTreeMap<String, Vec<String>>,
    keyframes: BTreeMap<String, Keyframes>,
    animations: BTreeMap<String, AnimationShorthand>,
    container: ContainerConfig,
    dark_mode: DarkMode,
    rem_base_px: f64,
}

impl TokenTable {
    /// Build the table, reporting every malformed expression at once.
    ///
    /// Dangling animation references are not construction errors; they
    /// surface when the animation is resolved.
    pub fn from_config(config: &TokensmithConfig) -> Result<Self, ConfigError> {
        let extend = &config.theme.extend;
        let mut errors = Vec::new();

        let mut colors = BTreeMap::new();
        for (name, entry) in &extend.colors {
            match entry {
                ColorEntry::Simple(value) => match ColorExpr::parse(value) {
                    Ok(expr) => {
                        colors.insert(name.clone(), Token::Simple(expr));
                    }
                    Err(e) => errors.push(format!("colors.{name}: {e}")),
                },
                ColorEntry::Composite(entries) => {
                    let mut parsed = BTreeMap::new();
                    for (key, value) in entries {
                        match ColorExpr::parse(value) {
                            Ok(expr) => {
                                parsed.insert(key.clone(), expr);
                            }
                            Err(e) => errors.push(format!("colors.{name}.{key}: {e}")),
                        }
                    }
                    colors.insert(name.clone(), Token::Composite(parsed));
                }
            }
        }

        let mut scales = BTreeMap::new();
        for (name, value) in &extend.border_radius {
            match DimensionExpr::parse(value) {
                Ok(expr) => {
                    scales.insert(name.clone(), expr);
                }
                Err(e) => errors.push(format!("border_radius.{name}: {e}")),
            }
        }

        let mut keyframes = BTreeMap::new();
        for (name, stops) in &extend.keyframes {
            match Keyframes::from_stops(name, stops) {
                Ok(kf) => {
                    keyframes.insert(name.clone(), kf);
                }
                Err(e) => errors.push(format!("keyframes.{name}: {e}")),
            }
        }

        let mut animations = BTreeMap::new();
        for (name, value) in &extend.animation {
            match AnimationShorthand::parse(value) {
                Ok(shorthand) => {
                    animations.insert(name.clone(), shorthand);
                }
                Err(e) => errors.push(format!("animation.{name}: {e}")),
            }
        }

        if !errors.is_empty() {
            return Err(ConfigError::ParseError(errors.join("; ")));
        }

        let utilities = flatten_utilities(&colors);
        debug!(
            colors = colors.len(),
            utilities = utilities.len(),
            scales = scales.len(),
            animations = animations.len(),
            "built token table"
        );

        Ok(Self {
            colors,
            utilities,
            scales,
            shadows: extend.box_shadow.clone(),
            fonts: extend.font_family.clone(),
            keyframes,
            animations,
            container: config.theme.container.clone(),
            dark_mode: config.dark_mode.clone(),
            rem_base_px: config.resolution.rem_base_px,
        })
    }

    pub fn color(&self, name: &str) -> Option<&Token> {
        self.colors.get(name)
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn utility(&self, class: &str) -> Option<(&str, Option<&str>)> {
        self.utilities
            .get(class)
            .map(|(token, key)| (token.as_str(), key.as_deref()))
    }

    /// Every flattened color utility name, sorted.
    pub fn utility_names(&self) -> impl Iterator<Item = &str> {
        self.utilities.keys().map(String::as_str)
    }

    pub fn scale(&self, name: &str) -> Option<&DimensionExpr> {
        self.scales.get(name)
    }

    pub fn scales(&self) -> impl Iterator<Item = (&str, &DimensionExpr)> {
        self.scales.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn shadow(&self, name: &str) -> Option<&str> {
        self.shadows.get(name).map(String::as_str)
    }

    pub fn shadows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shadows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn font_family(&self, name: &str) -> Option<&[String]> {
        self.fonts.get(name).map(Vec::as_slice)
    }

    pub fn font_families(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fonts.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keyframes(&self, name: &str) -> Option<&Keyframes> {
        self.keyframes.get(name)
    }

    pub fn animation(&self, name: &str) -> Option<&AnimationShorthand> {
        self.animations.get(name)
    }

    pub fn animations(&self) -> impl Iterator<Item = (&str, &AnimationShorthand)> {
        self.animations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn container(&self) -> &ContainerConfig {
        &self.container
    }

    pub fn dark_mode(&self) -> &DarkMode {
        &self.dark_mode
    }

    pub fn rem_base_px(&self) -> f64 {
        self.rem_base_px
    }
}

/// `primary` + `DEFAULT` becomes `primary`; any other sub-key is joined
/// with a hyphen. A name claimed twice keeps its first owner.
fn flatten_utilities(
    colors: &BTreeMap<String, Token>,
) -> BTreeMap<String, (String, Option<String>)> {
    let mut utilities = BTreeMap::new();
    for (name, token) in colors {
        let entries: Vec<(String, Option<String>)> = match token {
            Token::Simple(_) => vec![(name.clone(), None)],
            Token::Composite(keys) => keys
                .keys()
                .map(|key| {
                    let class = if key == DEFAULT_SUB_KEY {
                        name.clone()
                    } else {
                        format!("{name}-{key}")
                    };
                    (class, Some(key.clone()))
                })
                .collect(),
        };

        for (class, key) in entries {
            if let Some((owner, _)) = utilities.get(&class) {
                warn!(class = %class, owner = %owner, token = %name, "utility name claimed twice, keeping first");
                continue;
            }
            utilities.insert(class, (name.clone(), key));
        }
    }
    utilities
}
