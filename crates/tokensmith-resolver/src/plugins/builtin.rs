//! Built-in plugins. Each contributes a small set of marker rules.

use super::{ClassRule, UtilityPlugin};
use crate::table::TokenTable;

pub fn builtin_plugin(name: &str) -> Option<Box<dyn UtilityPlugin>> {
    match name {
        "typography" => Some(Box::new(TypographyPlugin)),
        "container-queries" => Some(Box::new(ContainerQueriesPlugin)),
        "animate" => Some(Box::new(AnimatePlugin)),
        _ => None,
    }
}

/// `.prose` readable-measure defaults, colored from the theme when the
/// table has `foreground` and `primary` tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypographyPlugin;

impl UtilityPlugin for TypographyPlugin {
    fn name(&self) -> &str {
        "typography"
    }

    fn register_utilities(&self, table: &TokenTable) -> Vec<ClassRule> {
        let mut prose = ClassRule::new(".prose")
            .declare("max-width", "65ch")
            .declare("line-height", "1.75");
        if table.color("foreground").is_some() {
            prose = prose.declare("color", "var(--tw-prose-body)");
        }

        let mut rules = vec![prose];
        if table.utility("primary").is_some() {
            rules.push(
                ClassRule::new(".prose :where(a)")
                    .declare("color", "var(--tw-prose-links)")
                    .declare("text-decoration", "underline"),
            );
        }
        rules
    }
}

/// `@container` markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerQueriesPlugin;

impl UtilityPlugin for ContainerQueriesPlugin {
    fn name(&self) -> &str {
        "container-queries"
    }

    fn register_utilities(&self, _table: &TokenTable) -> Vec<ClassRule> {
        vec![
            ClassRule::new(r".\@container").declare("container-type", "inline-size"),
            ClassRule::new(r".\@container-normal").declare("container-type", "normal"),
        ]
    }
}

/// Keyframes the enter/exit markers play, forwards and reversed.
pub const ENTER_KEYFRAMES: &str = "fade-in";

/// Enter/exit animation markers. Only names keyframes the table defines;
/// without them the markers carry timing alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimatePlugin;

impl UtilityPlugin for AnimatePlugin {
    fn name(&self) -> &str {
        "animate"
    }

    fn register_utilities(&self, table: &TokenTable) -> Vec<ClassRule> {
        let mut enter = ClassRule::new(".animate-in").declare("animation-duration", "150ms");
        let mut exit = ClassRule::new(".animate-out").declare("animation-duration", "150ms");
        if table.keyframes(ENTER_KEYFRAMES).is_some() {
            enter = enter.declare("animation-name", ENTER_KEYFRAMES);
            exit = exit
                .declare("animation-name", ENTER_KEYFRAMES)
                .declare("animation-direction", "reverse");
        }
        vec![enter, exit]
    }
}
