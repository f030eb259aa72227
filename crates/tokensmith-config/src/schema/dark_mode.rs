//! Dark-mode activation strategy.
//!
//! Accepts the same shapes utility-class generators do: `"media"`,
//! `"class"`, `["class"]`, `["class", ".theme-dark"]`, `"selector"` and
//! `["selector", "[data-mode='dark']"]`.

use serde::{Deserialize, Serialize};

/// Selector used by class strategies when none is configured.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DarkModeRepr", into = "DarkModeRepr")]
pub enum DarkMode {
    /// Follow the OS preference.
    Media,
    /// Dark when an ancestor carries the class (or custom selector).
    Class(Option<String>),
    /// Dark when an ancestor matches the selector.
    Selector(Option<String>),
}

impl Default for DarkMode {
    fn default() -> Self {
        DarkMode::Class(None)
    }
}

/// How a consumer detects that dark mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DarkModeActivation {
    MediaQuery(&'static str),
    AncestorSelector(String),
}

impl DarkMode {
    pub fn activation(&self) -> DarkModeActivation {
        match self {
            DarkMode::Media => DarkModeActivation::MediaQuery("(prefers-color-scheme: dark)"),
            DarkMode::Class(selector) | DarkMode::Selector(selector) => {
                DarkModeActivation::AncestorSelector(
                    selector
                        .clone()
                        .unwrap_or_else(|| DEFAULT_DARK_SELECTOR.to_string()),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DarkModeRepr {
    Single(String),
    List(Vec<String>),
}

impl TryFrom<DarkModeRepr> for DarkMode {
    type Error = String;

    fn try_from(repr: DarkModeRepr) -> Result<Self, Self::Error> {
        let parts = match repr {
            DarkModeRepr::Single(s) => vec![s],
            DarkModeRepr::List(parts) => parts,
        };
        let mut iter = parts.into_iter();
        let strategy = iter
            .next()
            .ok_or_else(|| "dark_mode must name a strategy".to_string())?;
        let selector = iter.next();
        if iter.next().is_some() {
            return Err("dark_mode takes at most a strategy and one selector".into());
        }

        match (strategy.as_str(), selector) {
            ("media", None) => Ok(DarkMode::Media),
            ("media", Some(_)) => Err("dark_mode 'media' does not take a selector".into()),
            ("class", selector) => Ok(DarkMode::Class(selector)),
            ("selector", selector) => Ok(DarkMode::Selector(selector)),
            (other, _) => Err(format!(
                "unknown dark_mode strategy '{other}' (expected media, class or selector)"
            )),
        }
    }
}

impl From<DarkMode> for DarkModeRepr {
    fn from(mode: DarkMode) -> Self {
        match mode {
            DarkMode::Media => DarkModeRepr::Single("media".into()),
            DarkMode::Class(selector) => {
                DarkModeRepr::List(std::iter::once("class".into()).chain(selector).collect())
            }
            DarkMode::Selector(selector) => {
                DarkModeRepr::List(std::iter::once("selector".into()).chain(selector).collect())
            }
        }
    }
}
