//! CSS `animation` shorthand parsing.
//!
//! Animation table entries look like `accordion-down 0.2s ease-out`. The
//! first component names the keyframes; the rest are classified by shape.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use super::format_css_number;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)(ms|s)$").unwrap());

const EASING_KEYWORDS: &[&str] = &[
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "linear",
    "step-start",
    "step-end",
];

const EASING_FUNCTIONS: &[&str] = &["cubic-bezier(", "steps(", "linear("];

/// Timing function applied when the shorthand names none.
pub const DEFAULT_EASING: &str = "ease";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationCount {
    Infinite,
    Count(f64),
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Infinite => f.write_str("infinite"),
            IterationCount::Count(n) => f.write_str(&format_css_number(*n)),
        }
    }
}

/// A parsed animation shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationShorthand {
    /// Name of the referenced keyframes.
    pub keyframes: String,
    pub duration: Duration,
    pub easing: String,
    pub delay: Option<Duration>,
    pub iterations: Option<IterationCount>,
    /// Direction, fill mode and play state keywords, kept verbatim.
    pub extra: Vec<String>,
}

impl AnimationShorthand {
    pub fn parse(s: &str) -> Result<Self, String> {
        let parts = split_components(s)?;
        let Some((name, rest)) = parts.split_first() else {
            return Err("animation value is empty".into());
        };
        if parse_time(name).is_some() {
            return Err(format!("'{s}' must start with a keyframes name"));
        }

        let mut duration = None;
        let mut delay = None;
        let mut easing = None;
        let mut iterations = None;
        let mut extra = Vec::new();

        for part in rest {
            if let Some(time) = parse_time(part) {
                if duration.is_none() {
                    duration = Some(time);
                } else if delay.is_none() {
                    delay = Some(time);
                } else {
                    return Err(format!("'{s}' has more than two time values"));
                }
            } else if easing.is_none() && is_easing(part) {
                easing = Some(part.clone());
            } else if iterations.is_none() && part == "infinite" {
                iterations = Some(IterationCount::Infinite);
            } else if let (None, Ok(n)) = (iterations, part.parse::<f64>()) {
                iterations = Some(IterationCount::Count(n));
            } else {
                extra.push(part.clone());
            }
        }

        let duration = duration.ok_or_else(|| format!("'{s}' has no duration"))?;

        Ok(Self {
            keyframes: name.clone(),
            duration,
            easing: easing.unwrap_or_else(|| DEFAULT_EASING.to_string()),
            delay,
            iterations,
            extra,
        })
    }
}

impl fmt::Display for AnimationShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.keyframes,
            format_duration(self.duration),
            self.easing
        )?;
        if let Some(delay) = self.delay {
            write!(f, " {}", format_duration(delay))?;
        }
        if let Some(iterations) = self.iterations {
            write!(f, " {iterations}")?;
        }
        for part in &self.extra {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

/// Format a duration as CSS seconds (`0.2s`).
pub fn format_duration(d: Duration) -> String {
    format!("{}s", format_css_number(d.as_secs_f64()))
}

fn parse_time(s: &str) -> Option<Duration> {
    let caps = TIME_RE.captures(s)?;
    let value: f64 = caps[1].parse().ok()?;
    let nanos = match &caps[2] {
        "ms" => value * 1e6,
        _ => value * 1e9,
    };
    Some(Duration::from_nanos(nanos.round() as u64))
}

fn is_easing(s: &str) -> bool {
    EASING_KEYWORDS.contains(&s) || EASING_FUNCTIONS.iter().any(|f| s.starts_with(f))
}

/// Split on whitespace outside parentheses, so `cubic-bezier(0.4, 0, 0.2, 1)`
/// stays one component.
fn split_components(s: &str) -> Result<Vec<String>, String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in s.trim().chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("unbalanced ')' in '{s}'"))?;
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if depth != 0 {
        return Err(format!("unbalanced '(' in '{s}'"));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_shorthand() {
        let a = AnimationShorthand::parse("accordion-down 0.2s ease-out").unwrap();
        assert_eq!(a.keyframes, "accordion-down");
        assert_eq!(a.duration, Duration::from_millis(200));
        assert_eq!(a.easing, "ease-out");
        assert!(a.delay.is_none());
        assert!(a.iterations.is_none());
    }

    #[test]
    fn parses_full_shorthand() {
        let a = AnimationShorthand::parse(
            "spin 1s cubic-bezier(0.4, 0, 0.2, 1) 150ms infinite alternate both",
        )
        .unwrap();
        assert_eq!(a.keyframes, "spin");
        assert_eq!(a.duration, Duration::from_secs(1));
        assert_eq!(a.easing, "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(a.delay, Some(Duration::from_millis(150)));
        assert_eq!(a.iterations, Some(IterationCount::Infinite));
        assert_eq!(a.extra, vec!["alternate", "both"]);
    }

    #[test]
    fn easing_defaults_to_ease() {
        let a = AnimationShorthand::parse("pulse 2s 3").unwrap();
        assert_eq!(a.easing, "ease");
        assert_eq!(a.iterations, Some(IterationCount::Count(3.0)));
    }

    #[test]
    fn rejects_missing_duration_and_name() {
        assert!(AnimationShorthand::parse("fade-in ease-out")
            .unwrap_err()
            .contains("no duration"));
        assert!(AnimationShorthand::parse("0.2s ease-out").is_err());
        assert!(AnimationShorthand::parse("   ").is_err());
        assert!(AnimationShorthand::parse("x 1s cubic-bezier(0.4, 0").is_err());
    }

    #[test]
    fn display_round_trips_reference_values() {
        for value in [
            "accordion-down 0.2s ease-out",
            "fade-in 0.5s ease-out",
            "spin 1s linear infinite",
        ] {
            let a = AnimationShorthand::parse(value).unwrap();
            assert_eq!(a.to_string(), value);
        }
    }
}
