//! Resolution settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Pixels per `rem`/`em` when a scale offset and its root disagree on
    /// units (valid range: 1-64).
    pub rem_base_px: f64,
    /// Variable set used when none is requested explicitly.
    pub default_mode: String,
    /// Start every variable set from the built-in `light` / `dark` values.
    pub builtin_variables: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            rem_base_px: 16.0,
            default_mode: "light".into(),
            builtin_variables: true,
        }
    }
}
