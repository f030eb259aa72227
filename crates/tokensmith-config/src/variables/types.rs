//! Base variable set types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strip the custom-property prefix: `--primary` and `primary` name the
/// same variable.
pub fn normalize_variable_name(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix("--").unwrap_or(name)
}

/// An immutable snapshot of base variable values for one mode.
///
/// Resolution always receives a snapshot explicitly. Switching themes
/// means passing a different set; sets are never edited in place, the
/// builder-style methods return new sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    name: String,
    values: BTreeMap<String, String>,
}

impl VariableSet {
    pub fn new<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (normalize_variable_name(k.as_ref()).to_string(), v.into()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(normalize_variable_name(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A new set with `overrides` layered on top of this one.
    /// The result takes the name of `overrides`.
    pub fn overlay(&self, overrides: &VariableSet) -> VariableSet {
        let mut values = self.values.clone();
        values.extend(
            overrides
                .values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        VariableSet {
            name: overrides.name.clone(),
            values,
        }
    }

    /// A new set identical to this one except for a single variable.
    pub fn with(&self, name: &str, value: impl Into<String>) -> VariableSet {
        let mut next = self.clone();
        next.values
            .insert(normalize_variable_name(name).to_string(), value.into());
        next
    }
}

/// On-disk variable set (YAML).
///
/// ```yaml
/// name: midnight
/// extends: dark
/// variables:
///   primary: "0.7 0.2 280"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableSetFile {
    pub name: Option<String>,
    /// Mode whose values this file is layered over.
    pub extends: Option<String>,
    pub variables: BTreeMap<String, String>,
}
