//! Content scope validation.

use crate::schema::TokensmithConfig;
use std::collections::HashSet;
use tracing::warn;

/// The content scope must name at least one non-empty glob. Repeated globs
/// are harmless and only logged.
pub(crate) fn validate_content(errors: &mut Vec<String>, config: &TokensmithConfig) {
    if config.content.is_empty() {
        errors.push("content must list at least one glob".into());
        return;
    }

    let mut seen = HashSet::new();
    for (i, pattern) in config.content.iter().enumerate() {
        if pattern.trim().is_empty() {
            errors.push(format!("content[{i}] is empty"));
        } else if !seen.insert(pattern.trim()) {
            warn!("content glob '{pattern}' is listed more than once");
        }
    }
}
