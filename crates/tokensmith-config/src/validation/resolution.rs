//! Resolution settings, font stacks and plugin list validation.

use crate::schema::TokensmithConfig;
use crate::variables::available_modes;

use super::helpers::validate_range_f64;

pub(crate) fn validate_resolution(errors: &mut Vec<String>, config: &TokensmithConfig) {
    validate_range_f64(
        errors,
        "resolution.rem_base_px",
        config.resolution.rem_base_px,
        1.0,
        64.0,
    );

    let mode = &config.resolution.default_mode;
    if !available_modes(config).contains(mode) {
        errors.push(format!(
            "resolution.default_mode = '{mode}' is not a known variable set"
        ));
    }
}

pub(crate) fn validate_fonts(errors: &mut Vec<String>, config: &TokensmithConfig) {
    for (name, stack) in &config.theme.extend.font_family {
        if stack.iter().all(|f| f.trim().is_empty()) {
            errors.push(format!("font_family.{name} lists no fonts"));
        }
    }
}

pub(crate) fn validate_plugins(errors: &mut Vec<String>, config: &TokensmithConfig) {
    for (i, plugin) in config.plugins.iter().enumerate() {
        if plugin.trim().is_empty() {
            errors.push(format!("plugins[{i}] is empty"));
        } else if config.plugins[..i].contains(plugin) {
            errors.push(format!("plugin '{plugin}' is listed more than once"));
        }
    }
}
