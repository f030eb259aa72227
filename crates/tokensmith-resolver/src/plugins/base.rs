//! Rules every build gets regardless of the plugin list.

use super::ClassRule;
use crate::table::TokenTable;
use tokensmith_common::{Dimension, LengthUnit};
use tracing::warn;

/// `.container` (with one breakpoint rule per screen, narrowest first)
/// followed by `.animate-<name>` for every bound animation.
pub fn core_rules(table: &TokenTable) -> Vec<ClassRule> {
    let mut rules = container_rules(table);

    for (name, shorthand) in table.animations() {
        if table.keyframes(&shorthand.keyframes).is_none() {
            warn!(
                animation = name,
                keyframes = %shorthand.keyframes,
                "skipping animation with missing keyframes"
            );
            continue;
        }
        rules.push(
            ClassRule::new(format!(".animate-{name}")).declare("animation", shorthand.to_string()),
        );
    }

    rules
}

fn container_rules(table: &TokenTable) -> Vec<ClassRule> {
    let container = table.container();
    let mut base = ClassRule::new(".container").declare("width", "100%");
    if container.center {
        base = base
            .declare("margin-left", "auto")
            .declare("margin-right", "auto");
    }
    if !container.padding.is_empty() {
        base = base
            .declare("padding-left", container.padding.as_str())
            .declare("padding-right", container.padding.as_str());
    }

    let mut screens: Vec<(f64, &str)> = container
        .screens
        .values()
        .map(|width| {
            let px = Dimension::parse(width)
                .and_then(|d| d.convert_to(LengthUnit::Px, table.rem_base_px()))
                .map_or(f64::MAX, |d| d.value);
            (px, width.as_str())
        })
        .collect();
    screens.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut rules = vec![base];
    rules.extend(screens.into_iter().map(|(_, width)| {
        ClassRule::new(".container")
            .declare("max-width", width)
            .within(format!("@media (min-width: {width})"))
    }));
    rules
}
