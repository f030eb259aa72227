//! Token resolution against an explicit variable snapshot.
//!
//! A [`TokenResolver`] holds the immutable token table. Each call takes
//! the [`VariableSet`] of the active theme, so switching themes means
//! passing a different snapshot and nothing is cached between calls.

mod animation;
mod snapshot;

pub use animation::AnimationBinding;
pub use snapshot::ResolvedTheme;

use crate::table::{Token, TokenTable};
use tokensmith_common::{AlphaValue, ConfigError, Dimension, ResolveError};
use tokensmith_config::{TokensmithConfig, VariableSet};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TokenResolver {
    table: TokenTable,
}

impl TokenResolver {
    pub fn new(table: TokenTable) -> Self {
        Self { table }
    }

    pub fn from_config(config: &TokensmithConfig) -> Result<Self, ConfigError> {
        TokenTable::from_config(config).map(Self::new)
    }

    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    /// Resolve a color token to a concrete color.
    ///
    /// Composite tokens need a sub-key (`DEFAULT` included); simple tokens
    /// take none. `alpha` only applies to `<alpha-value>` expressions.
    pub fn resolve(
        &self,
        vars: &VariableSet,
        token: &str,
        sub_key: Option<&str>,
        alpha: Option<AlphaValue>,
    ) -> Result<String, ResolveError> {
        let entry = self
            .table
            .color(token)
            .ok_or_else(|| ResolveError::UnknownToken(token.to_string()))?;

        let (expr, label) = match (entry, sub_key) {
            (Token::Simple(expr), None) => (expr, token.to_string()),
            (Token::Composite(entries), Some(key)) => match entries.get(key) {
                Some(expr) => (expr, format!("{token}.{key}")),
                None => return Err(unknown_sub_key(token, entry, sub_key)),
            },
            _ => return Err(unknown_sub_key(token, entry, sub_key)),
        };

        let color = expr.render(&label, vars, alpha)?;
        debug!(token = %label, mode = vars.name(), color = %color, "resolved color");
        Ok(color)
    }

    /// Resolve a flattened utility name such as `primary` or
    /// `sidebar-primary-foreground`.
    pub fn resolve_utility(
        &self,
        vars: &VariableSet,
        class: &str,
        alpha: Option<AlphaValue>,
    ) -> Result<String, ResolveError> {
        let (token, key) = self
            .table
            .utility(class)
            .ok_or_else(|| ResolveError::UnknownToken(class.to_string()))?;
        self.resolve(vars, token, key, alpha)
    }

    /// Like [`resolve_utility`](Self::resolve_utility) but parses a
    /// trailing opacity modifier (`primary/50`, `ring/[.35]`).
    pub fn resolve_class(&self, vars: &VariableSet, class: &str) -> Result<String, ResolveError> {
        match class.split_once('/') {
            Some((name, modifier)) => {
                let alpha = AlphaValue::from_modifier(modifier)?;
                self.resolve_utility(vars, name, Some(alpha))
            }
            None => self.resolve_utility(vars, class, None),
        }
    }

    pub fn utility_names(&self) -> Vec<&str> {
        self.table.utility_names().collect()
    }

    /// Evaluate a derived scale entry against the snapshot's root value.
    pub fn resolve_derived(
        &self,
        vars: &VariableSet,
        scale: &str,
    ) -> Result<Dimension, ResolveError> {
        let expr = self
            .table
            .scale(scale)
            .ok_or_else(|| ResolveError::UnknownScale(scale.to_string()))?;
        let value = expr.evaluate(scale, vars, self.table.rem_base_px())?;
        debug!(scale, mode = vars.name(), value = %value, "resolved scale");
        Ok(value)
    }

    /// Bind an animation to its keyframes.
    pub fn resolve_animation<'a>(
        &'a self,
        name: &'a str,
    ) -> Result<AnimationBinding<'a>, ResolveError> {
        let shorthand = self
            .table
            .animation(name)
            .ok_or_else(|| ResolveError::UnknownAnimation(name.to_string()))?;
        let keyframes = self.table.keyframes(&shorthand.keyframes).ok_or_else(|| {
            ResolveError::DanglingAnimationReference {
                animation: name.to_string(),
                keyframes: shorthand.keyframes.clone(),
            }
        })?;
        Ok(AnimationBinding {
            name,
            shorthand,
            keyframes,
        })
    }

    pub fn resolve_shadow(&self, name: &str) -> Result<&str, ResolveError> {
        self.table
            .shadow(name)
            .ok_or_else(|| ResolveError::UnknownToken(name.to_string()))
    }

    /// Render a font stack as a CSS `font-family` value.
    pub fn resolve_font_family(&self, name: &str) -> Result<String, ResolveError> {
        let fonts = self
            .table
            .font_family(name)
            .ok_or_else(|| ResolveError::UnknownToken(name.to_string()))?;
        Ok(fonts
            .iter()
            .map(|font| quote_font_name(font))
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// Resolve every token against one snapshot. Per-entry failures are
    /// collected rather than aborting the pass.
    pub fn resolve_all(&self, vars: &VariableSet) -> ResolvedTheme {
        snapshot::resolve_all(self, vars)
    }
}

fn unknown_sub_key(token: &str, entry: &Token, key: Option<&str>) -> ResolveError {
    ResolveError::UnknownSubKey {
        token: token.to_string(),
        key: key.map(str::to_string),
        available: entry.sub_keys(),
    }
}

fn quote_font_name(font: &str) -> String {
    let already_quoted = font.starts_with('"') || font.starts_with('\'');
    if !already_quoted && font.chars().any(char::is_whitespace) {
        format!("\"{font}\"")
    } else {
        font.to_string()
    }
}
