//! Keyframe and animation validation.
//!
//! Every keyframe set needs two or more valid stops, and every animation
//! must parse and reference keyframes that exist.

use crate::schema::TokensmithConfig;
use tokensmith_common::{AnimationShorthand, KeyframeOffset};

pub(crate) fn validate_keyframes(errors: &mut Vec<String>, config: &TokensmithConfig) {
    for (name, stops) in &config.theme.extend.keyframes {
        if stops.len() < 2 {
            errors.push(format!(
                "keyframes.{name} has {} stop(s), at least 2 are required",
                stops.len()
            ));
        }
        for selector in stops.keys() {
            if let Err(e) = KeyframeOffset::parse(selector) {
                errors.push(format!("keyframes.{name}: {e}"));
            }
        }
    }
}

pub(crate) fn validate_animations(errors: &mut Vec<String>, config: &TokensmithConfig) {
    let keyframes = &config.theme.extend.keyframes;
    for (name, value) in &config.theme.extend.animation {
        match AnimationShorthand::parse(value) {
            Ok(shorthand) if !keyframes.contains_key(&shorthand.keyframes) => {
                errors.push(format!(
                    "animation.{name} references missing keyframes '{}'",
                    shorthand.keyframes
                ));
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("animation.{name}: {e}")),
        }
    }
}
