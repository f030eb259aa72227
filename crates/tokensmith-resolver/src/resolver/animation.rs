use crate::keyframes::Keyframes;
use std::time::Duration;
use tokensmith_common::AnimationShorthand;

/// An animation bound to the keyframes it references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationBinding<'a> {
    pub name: &'a str,
    pub shorthand: &'a AnimationShorthand,
    pub keyframes: &'a Keyframes,
}

impl AnimationBinding<'_> {
    pub fn duration(&self) -> Duration {
        self.shorthand.duration
    }

    pub fn easing(&self) -> &str {
        &self.shorthand.easing
    }

    /// The `animation` property value.
    pub fn css_value(&self) -> String {
        self.shorthand.to_string()
    }

    /// `@keyframes` block followed by the `.animate-<name>` rule.
    pub fn to_css(&self) -> String {
        format!(
            "{}\n.animate-{} {{\n  animation: {};\n}}",
            self.keyframes.to_css(),
            self.name,
            self.css_value()
        )
    }
}
