//! Scale expressions: a root variable plus a fixed offset.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tokensmith_common::{Dimension, LengthUnit, ResolveError};
use tokensmith_config::VariableSet;

static ROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^var\(\s*--([A-Za-z0-9_-]+)\s*\)$").unwrap());

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^calc\(\s*var\(\s*--([A-Za-z0-9_-]+)\s*\)\s+([+-])\s+(\d*\.?\d+(?:px|rem|em|%)?)\s*\)$",
    )
    .unwrap()
});

/// A derived scale value. Kept as an expression and evaluated against
/// the current root on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionExpr {
    Derived { root: String, offset: Dimension },
    Fixed(Dimension),
}

impl DimensionExpr {
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(caps) = ROOT_RE.captures(s) {
            return Ok(DimensionExpr::Derived {
                root: caps[1].to_string(),
                offset: Dimension::new(0.0, LengthUnit::None),
            });
        }

        if let Some(caps) = OFFSET_RE.captures(s) {
            let magnitude = Dimension::parse(&caps[3])
                .ok_or_else(|| format!("invalid offset '{}' in '{s}'", &caps[3]))?;
            let sign = if &caps[2] == "-" { -1.0 } else { 1.0 };
            return Ok(DimensionExpr::Derived {
                root: caps[1].to_string(),
                offset: Dimension::new(sign * magnitude.value, magnitude.unit),
            });
        }

        Dimension::parse(s)
            .map(DimensionExpr::Fixed)
            .ok_or_else(|| format!("unsupported scale expression '{s}'"))
    }

    pub fn root(&self) -> Option<&str> {
        match self {
            DimensionExpr::Derived { root, .. } => Some(root),
            DimensionExpr::Fixed(_) => None,
        }
    }

    /// Evaluate against the given snapshot. `scale` only labels errors.
    pub fn evaluate(
        &self,
        scale: &str,
        vars: &VariableSet,
        rem_base_px: f64,
    ) -> Result<Dimension, ResolveError> {
        let (root, offset) = match self {
            DimensionExpr::Fixed(value) => return Ok(*value),
            DimensionExpr::Derived { root, offset } => (root, offset),
        };

        let raw = vars
            .get(root)
            .ok_or_else(|| ResolveError::UndefinedVariable(root.clone()))?;
        let base = Dimension::parse(raw).ok_or_else(|| ResolveError::InvalidDimension {
            scale: scale.to_string(),
            reason: format!("--{root} = '{raw}' is not a length"),
        })?;

        base.offset_by(*offset, rem_base_px)
            .ok_or_else(|| ResolveError::InvalidDimension {
                scale: scale.to_string(),
                reason: format!("cannot offset --{root} = '{raw}' by {offset}"),
            })
    }
}
