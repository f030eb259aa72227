//! Variable set resolution and loading.
//!
//! Resolves mode names (`light`, `dark`, or a custom name) and file paths
//! to [`VariableSet`] snapshots.

use super::builtin::{builtin_variable_set, BUILT_IN_VARIABLE_SETS};
use super::types::{VariableSet, VariableSetFile};
use crate::schema::TokensmithConfig;
use std::path::{Path, PathBuf};
use tokensmith_common::ConfigError;
use tracing::{debug, info};

/// Guards against `extends` cycles between variable files.
const MAX_EXTENDS_DEPTH: usize = 8;

fn looks_like_path(name: &str) -> bool {
    name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml")
}

/// Find `<name>.yaml` in the variable search paths.
///
/// Looks in `variables/` under the working directory, then in the
/// platform config directory (`<config_dir>/tokensmith/variables/`).
fn find_variable_file(name: &str) -> Option<PathBuf> {
    let file_name = format!("{name}.yaml");

    let local_path = PathBuf::from("variables").join(&file_name);
    if local_path.exists() {
        return Some(local_path);
    }

    let config_path = dirs::config_dir()?
        .join("tokensmith")
        .join("variables")
        .join(&file_name);
    config_path.exists().then_some(config_path)
}

/// Names of every mode the config can select without a file path.
pub fn available_modes(config: &TokensmithConfig) -> Vec<String> {
    let mut modes: Vec<String> = Vec::new();
    if config.resolution.builtin_variables {
        modes.extend(BUILT_IN_VARIABLE_SETS.iter().map(|m| m.to_string()));
    }
    for name in config.variables.keys() {
        if !modes.contains(name) {
            modes.push(name.clone());
        }
    }
    modes
}

/// Resolve a mode name or a YAML file path to a variable set.
///
/// A mode starts from the built-in set of that name (when enabled) and
/// layers the config's `[variables.<mode>]` table on top. Unknown modes
/// fall back to `<mode>.yaml` in the search paths.
pub fn variable_set_for(
    config: &TokensmithConfig,
    name_or_path: &str,
) -> Result<VariableSet, ConfigError> {
    resolve_with_depth(config, name_or_path, 0)
}

fn resolve_with_depth(
    config: &TokensmithConfig,
    name_or_path: &str,
    depth: usize,
) -> Result<VariableSet, ConfigError> {
    if depth > MAX_EXTENDS_DEPTH {
        return Err(ConfigError::ValidationError(format!(
            "variable set '{name_or_path}' exceeds {MAX_EXTENDS_DEPTH} levels of 'extends'"
        )));
    }

    if looks_like_path(name_or_path) {
        return load_variable_set_with_depth(config, Path::new(name_or_path), depth);
    }

    let builtin = config
        .resolution
        .builtin_variables
        .then(|| builtin_variable_set(name_or_path))
        .flatten();
    let configured = config
        .variables
        .get(name_or_path)
        .map(|values| VariableSet::new(name_or_path, values.clone()));

    match (builtin, configured) {
        (Some(base), Some(overrides)) => Ok(base.overlay(&overrides)),
        (Some(set), None) | (None, Some(set)) => {
            debug!(mode = name_or_path, variables = set.len(), "selected variable set");
            Ok(set)
        }
        (None, None) => match find_variable_file(name_or_path) {
            Some(path) => load_variable_set_with_depth(config, &path, depth),
            None => Err(ConfigError::ValidationError(format!(
                "unknown variable set '{name_or_path}' (available: {})",
                available_modes(config).join(", ")
            ))),
        },
    }
}

/// Load a variable set from a YAML file, layering it over its `extends`
/// mode when one is named.
pub fn load_variable_set(
    config: &TokensmithConfig,
    path: &Path,
) -> Result<VariableSet, ConfigError> {
    load_variable_set_with_depth(config, path, 0)
}

fn load_variable_set_with_depth(
    config: &TokensmithConfig,
    path: &Path,
    depth: usize,
) -> Result<VariableSet, ConfigError> {
    let file = load_variable_file(path)?;
    let name = file
        .name
        .clone()
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    let own = VariableSet::new(name, file.variables);

    match file.extends.as_deref() {
        Some(base) => Ok(resolve_with_depth(config, base, depth + 1)?.overlay(&own)),
        None => Ok(own),
    }
}

/// Parse a variable set YAML file without resolving `extends`.
pub fn load_variable_file(path: &Path) -> Result<VariableSetFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to read variable file {}: {e}",
            path.display()
        ))
    })?;

    let file: VariableSetFile = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse variable YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded variable set from {}", path.display());
    Ok(file)
}
