//! Full configuration validation.
//!
//! Checks the static token table for internal consistency: keyframes,
//! animation references, content globs, container lengths, fonts, plugins
//! and resolution settings. Each area has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.
//!
//! Color and radius expressions are checked when the token table is built,
//! and base variable values only when a token is resolved.

mod container;
mod content;
mod helpers;
mod motion;
mod resolution;


use crate::schema::TokensmithConfig;
use tokensmith_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TokensmithConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    content::validate_content(&mut errors, config);
    container::validate_container(&mut errors, config);
    motion::validate_keyframes(&mut errors, config);
    motion::validate_animations(&mut errors, config);
    resolution::validate_fonts(&mut errors, config);
    resolution::validate_plugins(&mut errors, config);
    resolution::validate_resolution(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
