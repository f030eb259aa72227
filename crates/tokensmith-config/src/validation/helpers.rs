//! Shared validation helpers used by all section validators.

use tokensmith_common::Dimension;

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a CSS length.
pub(crate) fn validate_dimension(errors: &mut Vec<String>, name: &str, value: &str) {
    if Dimension::parse(value).is_none() {
        errors.push(format!("{name} = '{value}' is not a valid length"));
    }
}
