mod alpha;
mod animation;
mod channels;
mod dimension;
mod keyframes;

pub use alpha::AlphaValue;
pub use animation::{format_duration, AnimationShorthand, IterationCount, DEFAULT_EASING};
pub use channels::ChannelTriple;
pub use dimension::{Dimension, LengthUnit};
pub use keyframes::KeyframeOffset;

/// Format a number the way it reads in CSS: at most four decimals, no
/// trailing zeros, no negative zero.
pub fn format_css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".into();
    }
    format!("{rounded}")
}
