use serde::{Deserialize, Serialize};

/// A keyframe stop selector (`from`, `to`, `50%`, or a list like `0%, 100%`).
///
/// `position` is the first listed offset in percent and orders the stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeOffset {
    pub selector: String,
    pub position: f64,
}

impl KeyframeOffset {
    pub fn parse(selector: &str) -> Result<Self, String> {
        let mut first = None;
        for part in selector.split(',') {
            let pos = parse_single(part.trim())
                .ok_or_else(|| format!("'{selector}' is not a valid keyframe selector"))?;
            first.get_or_insert(pos);
        }
        let position = first.ok_or_else(|| "keyframe selector is empty".to_string())?;
        Ok(Self {
            selector: selector.trim().to_string(),
            position,
        })
    }
}

fn parse_single(s: &str) -> Option<f64> {
    match s {
        "from" => Some(0.0),
        "to" => Some(100.0),
        _ => {
            let pct: f64 = s.strip_suffix('%')?.parse().ok()?;
            (0.0..=100.0).contains(&pct).then_some(pct)
        }
    }
}
