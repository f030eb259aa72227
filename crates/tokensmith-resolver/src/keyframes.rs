//! Named keyframe sequences.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use tokensmith_common::KeyframeOffset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyframeStop {
    pub offset: KeyframeOffset,
    /// CSS property to value, applied at this offset.
    pub declarations: BTreeMap<String, String>,
}

/// Stops are kept in ascending offset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframes {
    pub name: String,
    pub stops: Vec<KeyframeStop>,
}

impl Keyframes {
    /// Parse a keyframe set. At least two stops are required.
    pub fn from_stops(
        name: &str,
        stops: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> Result<Self, String> {
        if stops.len() < 2 {
            return Err(format!(
                "{} stop(s), at least 2 are required",
                stops.len()
            ));
        }
        let mut parsed = stops
            .iter()
            .map(|(selector, declarations)| {
                Ok(KeyframeStop {
                    offset: KeyframeOffset::parse(selector)?,
                    declarations: declarations.clone(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        parsed.sort_by(|a, b| a.offset.position.total_cmp(&b.offset.position));

        Ok(Self {
            name: name.to_string(),
            stops: parsed,
        })
    }

    /// Render as a CSS `@keyframes` block.
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for stop in &self.stops {
            let _ = writeln!(css, "  {} {{", stop.offset.selector);
            for (property, value) in &stop.declarations {
                let _ = writeln!(css, "    {property}: {value};");
            }
            css.push_str("  }\n");
        }
        css.push('}');
        css
    }
}
