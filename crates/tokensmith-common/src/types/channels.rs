use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// One channel of a color-space triple: a number with an optional
/// percentage or angle unit, or the CSS `none` keyword.
static CHANNEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:none|[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?(?:%|deg|rad|grad|turn)?)$")
        .unwrap()
});

/// The three channels of a color in a device-independent space, as stored
/// in a base variable (e.g. `0.6 0.15 250` for OKLCH). Never carries alpha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTriple([String; 3]);

impl ChannelTriple {
    /// Parse a whitespace separated channel triple.
    ///
    /// On failure the returned string explains what is wrong with the value.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("value is empty".into());
        }
        if s.contains('/') {
            return Err(format!("'{s}' carries an alpha component"));
        }

        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(format!("'{s}' has {} channels, expected 3", parts.len()));
        }
        if let Some(bad) = parts.iter().find(|p| !CHANNEL_RE.is_match(p)) {
            return Err(format!("'{bad}' is not a valid channel in '{s}'"));
        }

        Ok(Self([
            parts[0].to_string(),
            parts[1].to_string(),
            parts[2].to_string(),
        ]))
    }

    pub fn channels(&self) -> [&str; 3] {
        [&self.0[0], &self.0[1], &self.0[2]]
    }
}

impl fmt::Display for ChannelTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}
