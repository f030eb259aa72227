//! Color expressions: how a token indirects through a base variable.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tokensmith_common::{AlphaValue, ChannelTriple, ResolveError};
use tokensmith_config::VariableSet;

/// The placeholder a utility-class generator substitutes with the
/// requested opacity.
pub const ALPHA_PLACEHOLDER: &str = "<alpha-value>";

/// `space(var(--name))`, optionally followed by `/ <alpha-value>` or a
/// fixed alpha inside the function.
static VARIABLE_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-z][a-z0-9-]*)\(\s*var\(\s*--([A-Za-z0-9_-]+)\s*\)\s*(?:/\s*(<alpha-value>|\d*\.?\d+%?)\s*)?\)$",
    )
    .unwrap()
});

/// Bare `var(--name)`: the variable holds a complete color.
static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^var\(\s*--([A-Za-z0-9_-]+)\s*\)$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// No alpha component; requested opacity is ignored.
    Opaque,
    /// `<alpha-value>`: requested opacity is substituted, omitted otherwise.
    Placeholder,
    /// A fixed multiplier that requested opacity never overrides.
    Fixed(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorExpr {
    Variable {
        space: String,
        variable: String,
        alpha: AlphaMode,
    },
    Reference {
        variable: String,
    },
    Literal(String),
}

impl ColorExpr {
    /// Parse a token's color expression.
    ///
    /// Values that do not mention `var(` are literals. Values that do but
    /// match no supported shape are rejected so typos surface when the
    /// table is built rather than as broken CSS.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(caps) = VARIABLE_COLOR_RE.captures(s) {
            let alpha = match caps.get(3).map(|m| m.as_str()) {
                None => AlphaMode::Opaque,
                Some(ALPHA_PLACEHOLDER) => AlphaMode::Placeholder,
                Some(fixed) => AlphaMode::Fixed(parse_fixed_alpha(fixed)?),
            };
            return Ok(ColorExpr::Variable {
                space: caps[1].to_string(),
                variable: caps[2].to_string(),
                alpha,
            });
        }

        if let Some(caps) = REFERENCE_RE.captures(s) {
            return Ok(ColorExpr::Reference {
                variable: caps[1].to_string(),
            });
        }

        if s.contains("var(") || s.contains(ALPHA_PLACEHOLDER) {
            return Err(format!("unsupported color expression '{s}'"));
        }
        if s.is_empty() {
            return Err("color expression is empty".into());
        }
        Ok(ColorExpr::Literal(s.to_string()))
    }

    pub fn accepts_alpha(&self) -> bool {
        matches!(
            self,
            ColorExpr::Variable {
                alpha: AlphaMode::Placeholder,
                ..
            }
        )
    }

    /// The base variable this expression reads, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            ColorExpr::Variable { variable, .. } | ColorExpr::Reference { variable } => {
                Some(variable)
            }
            ColorExpr::Literal(_) => None,
        }
    }

    /// Produce a concrete color against the given snapshot.
    ///
    /// `token` only labels errors.
    pub fn render(
        &self,
        token: &str,
        vars: &VariableSet,
        requested_alpha: Option<AlphaValue>,
    ) -> Result<String, ResolveError> {
        match self {
            ColorExpr::Literal(value) => Ok(value.clone()),
            ColorExpr::Reference { variable } => {
                let value = lookup(vars, variable)?.trim();
                if value.is_empty() {
                    return Err(ResolveError::InvalidColorExpression {
                        token: token.to_string(),
                        reason: format!("--{variable} is empty"),
                    });
                }
                Ok(value.to_string())
            }
            ColorExpr::Variable {
                space,
                variable,
                alpha,
            } => {
                let raw = lookup(vars, variable)?;
                let channels = ChannelTriple::parse(raw).map_err(|reason| {
                    ResolveError::InvalidColorExpression {
                        token: token.to_string(),
                        reason: format!("--{variable}: {reason}"),
                    }
                })?;

                let alpha = match (alpha, requested_alpha) {
                    (AlphaMode::Placeholder, Some(requested)) => Some(requested.to_string()),
                    (AlphaMode::Fixed(fixed), _) => Some(fixed.to_string()),
                    _ => None,
                };

                Ok(match alpha {
                    Some(alpha) => format!("{space}({channels} / {alpha})"),
                    None => format!("{space}({channels})"),
                })
            }
        }
    }
}

fn lookup<'v>(vars: &'v VariableSet, variable: &str) -> Result<&'v str, ResolveError> {
    vars.get(variable)
        .ok_or_else(|| ResolveError::UndefinedVariable(variable.to_string()))
}

fn parse_fixed_alpha(s: &str) -> Result<f64, String> {
    let value = match s.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map_err(|e| e.to_string())? / 100.0,
        None => s.parse::<f64>().map_err(|e| e.to_string())?,
    };
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("fixed alpha '{s}' is outside [0, 1]"))
    }
}
