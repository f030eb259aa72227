pub mod errors;
pub mod types;

pub use errors::{ConfigError, ResolveError, TokensmithError};
pub use types::{
    format_css_number, AlphaValue, AnimationShorthand, ChannelTriple, Dimension, IterationCount,
    KeyframeOffset, LengthUnit,
};

pub type Result<T> = std::result::Result<T, TokensmithError>;
