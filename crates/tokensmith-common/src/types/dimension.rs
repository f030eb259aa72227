use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::format_css_number;

static DIMENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(px|rem|em|%)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Percent,
    /// Bare number, only meaningful for zero.
    None,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
            LengthUnit::Em => "em",
            LengthUnit::Percent => "%",
            LengthUnit::None => "",
        }
    }

    fn is_font_relative(self) -> bool {
        matches!(self, LengthUnit::Rem | LengthUnit::Em)
    }
}

/// A CSS length such as `8px` or `0.625rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Dimension {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn rem(value: f64) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    pub fn parse(s: &str) -> Option<Self> {
        let caps = DIMENSION_RE.captures(s.trim())?;
        let value: f64 = caps[1].parse().ok()?;
        let unit = match caps.get(2).map(|m| m.as_str()) {
            Some("px") => LengthUnit::Px,
            Some("rem") => LengthUnit::Rem,
            Some("em") => LengthUnit::Em,
            Some("%") => LengthUnit::Percent,
            _ => LengthUnit::None,
        };
        Some(Self { value, unit })
    }

    /// Express this dimension in `target` units.
    ///
    /// `rem` and `em` convert to and from `px` through `rem_base_px`. A bare
    /// zero converts to anything. Returns `None` for incompatible units.
    pub fn convert_to(self, target: LengthUnit, rem_base_px: f64) -> Option<Self> {
        if self.unit == target {
            return Some(self);
        }
        let value = match (self.unit, target) {
            (LengthUnit::None, _) if self.value == 0.0 => 0.0,
            (LengthUnit::Px, t) if t.is_font_relative() => self.value / rem_base_px,
            (u, LengthUnit::Px) if u.is_font_relative() => self.value * rem_base_px,
            (u, t) if u.is_font_relative() && t.is_font_relative() => self.value,
            _ => return None,
        };
        Some(Self::new(value, target))
    }

    /// Add `offset` to this dimension, keeping this dimension's unit.
    ///
    /// A unitless zero root adopts the offset's unit.
    pub fn offset_by(self, offset: Dimension, rem_base_px: f64) -> Option<Self> {
        if self.unit == LengthUnit::None && self.value == 0.0 {
            return Some(offset);
        }
        let offset = offset.convert_to(self.unit, rem_base_px)?;
        Some(Self::new(self.value + offset.value, self.unit))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = format_css_number(self.value);
        if number == "0" {
            return f.write_str("0");
        }
        write!(f, "{number}{}", self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_units() {
        assert_eq!(Dimension::parse("8px"), Some(Dimension::px(8.0)));
        assert_eq!(Dimension::parse("0.625rem"), Some(Dimension::rem(0.625)));
        assert_eq!(
            Dimension::parse("-2px"),
            Some(Dimension::new(-2.0, LengthUnit::Px))
        );
        assert_eq!(
            Dimension::parse("0"),
            Some(Dimension::new(0.0, LengthUnit::None))
        );
        assert_eq!(
            Dimension::parse("50%"),
            Some(Dimension::new(50.0, LengthUnit::Percent))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Dimension::parse("").is_none());
        assert!(Dimension::parse("8 px").is_none());
        assert!(Dimension::parse("var(--radius)").is_none());
        assert!(Dimension::parse("8vw").is_none());
    }

    #[test]
    fn offset_same_unit() {
        let root = Dimension::px(8.0);
        assert_eq!(
            root.offset_by(Dimension::px(-4.0), 16.0),
            Some(Dimension::px(4.0))
        );
    }

    #[test]
    fn offset_converts_px_into_rem() {
        let root = Dimension::rem(0.625);
        let sm = root.offset_by(Dimension::px(-4.0), 16.0).unwrap();
        assert_eq!(sm, Dimension::rem(0.375));
        assert_eq!(sm.to_string(), "0.375rem");
    }

    #[test]
    fn offset_rejects_percent_mix() {
        let root = Dimension::new(10.0, LengthUnit::Percent);
        assert!(root.offset_by(Dimension::px(-2.0), 16.0).is_none());
    }

    #[test]
    fn unitless_zero_root_adopts_offset_unit() {
        let root = Dimension::new(0.0, LengthUnit::None);
        assert_eq!(
            root.offset_by(Dimension::px(2.0), 16.0),
            Some(Dimension::px(2.0))
        );
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(Dimension::px(6.0).to_string(), "6px");
        assert_eq!(Dimension::rem(0.5).to_string(), "0.5rem");
        assert_eq!(Dimension::px(0.0).to_string(), "0");
    }
}
