//! Utility plugins.
//!
//! A plugin is anything that can turn the token table into extra class
//! rules. The configured plugin names map to the built-in providers;
//! embedders add their own through [`PluginRegistry::register`].

mod base;
mod builtin;
mod rule;

pub use base::core_rules;
pub use builtin::{builtin_plugin, AnimatePlugin, ContainerQueriesPlugin, TypographyPlugin};
pub use rule::ClassRule;

use crate::table::TokenTable;
use tokensmith_common::ConfigError;
use tracing::debug;

/// Names accepted in the config's `plugins` list.
pub const BUILT_IN_PLUGINS: &[&str] = &["typography", "container-queries", "animate"];

pub trait UtilityPlugin: Send + Sync {
    fn name(&self) -> &str;

    fn register_utilities(&self, table: &TokenTable) -> Vec<ClassRule>;
}

/// Plugins in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn UtilityPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate the built-in plugins named in a config.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for name in names {
            let name = name.as_ref();
            let plugin = builtin_plugin(name).ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "unknown plugin '{name}' (available: {})",
                    BUILT_IN_PLUGINS.join(", ")
                ))
            })?;
            registry.register(plugin)?;
        }
        Ok(registry)
    }

    /// Add a plugin. Names must be unique.
    pub fn register(&mut self, plugin: Box<dyn UtilityPlugin>) -> Result<(), ConfigError> {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            return Err(ConfigError::ValidationError(format!(
                "plugin '{}' is already registered",
                plugin.name()
            )));
        }
        debug!(plugin = plugin.name(), "registered plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Core rules followed by each plugin's rules, in registration order.
    pub fn collect_rules(&self, table: &TokenTable) -> Vec<ClassRule> {
        let mut rules = core_rules(table);
        for plugin in &self.plugins {
            let added = plugin.register_utilities(table);
            debug!(plugin = plugin.name(), rules = added.len(), "plugin utilities");
            rules.extend(added);
        }
        rules
    }

    /// Render every collected rule as one stylesheet.
    pub fn to_css(&self, table: &TokenTable) -> String {
        self.collect_rules(table)
            .iter()
            .map(ClassRule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests;
