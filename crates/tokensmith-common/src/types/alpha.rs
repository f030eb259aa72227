use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ResolveError;

/// A requested opacity in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AlphaValue(f64);

impl AlphaValue {
    pub const OPAQUE: AlphaValue = AlphaValue(1.0);

    pub fn new(value: f64) -> Result<Self, ResolveError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ResolveError::InvalidAlpha(value.to_string()))
        }
    }

    /// Parse a utility opacity modifier, the part after `/` in `bg-primary/50`.
    ///
    /// Plain integers are percentages (`50` → 0.5). Bracketed values are
    /// arbitrary: `[.35]` or `[35%]`.
    pub fn from_modifier(modifier: &str) -> Result<Self, ResolveError> {
        let invalid = || ResolveError::InvalidAlpha(modifier.to_string());
        let modifier = modifier.trim();

        let value = if let Some(inner) = modifier
            .strip_prefix('[')
            .and_then(|m| m.strip_suffix(']'))
        {
            match inner.strip_suffix('%') {
                Some(pct) => pct.parse::<f64>().map_err(|_| invalid())? / 100.0,
                None => inner.parse::<f64>().map_err(|_| invalid())?,
            }
        } else {
            let pct: u32 = modifier.parse().map_err(|_| invalid())?;
            f64::from(pct) / 100.0
        };

        Self::new(value).map_err(|_| invalid())
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AlphaValue {
    type Error = ResolveError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AlphaValue> for f64 {
    fn from(alpha: AlphaValue) -> Self {
        alpha.0
    }
}

/// Prints the shortest form that reads back as the same `f64`. Never
/// rounds, so a tiny opacity stays non-zero.
impl fmt::Display for AlphaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
