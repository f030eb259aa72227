//! Container validation (padding and screen widths).

use crate::schema::TokensmithConfig;

use super::helpers::validate_dimension;

pub(crate) fn validate_container(errors: &mut Vec<String>, config: &TokensmithConfig) {
    let container = &config.theme.container;
    validate_dimension(errors, "theme.container.padding", &container.padding);
    for (screen, width) in &container.screens {
        validate_dimension(
            errors,
            &format!("theme.container.screens.{screen}"),
            width,
        );
    }
}
