//! Content scope: which source files are scanned for utility usage.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tokensmith_common::ConfigError;
use tokensmith_config::TokensmithConfig;
use tracing::debug;

/// Compiled content globs.
///
/// Patterns are relative to the project root. `*` does not cross `/`;
/// `**` spans directories.
#[derive(Debug, Clone)]
pub struct ContentScope {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ContentScope {
    /// Compile patterns, dropping exact duplicates.
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
            if normalized.is_empty() || !seen.insert(normalized.to_string()) {
                continue;
            }
            let glob = GlobBuilder::new(normalized)
                .literal_separator(true)
                .build()
                .map_err(|e| {
                    ConfigError::ValidationError(format!("invalid content glob '{pattern}': {e}"))
                })?;
            builder.add(glob);
            kept.push(normalized.to_string());
        }

        let set = builder
            .build()
            .map_err(|e| ConfigError::ValidationError(format!("failed to build content globs: {e}")))?;
        debug!(patterns = kept.len(), "compiled content scope");
        Ok(Self {
            patterns: kept,
            set,
        })
    }

    pub fn from_config(config: &TokensmithConfig) -> Result<Self, ConfigError> {
        Self::new(&config.content)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a root-relative path falls inside the scope.
    pub fn match_content(&self, path: impl AsRef<Path>) -> bool {
        self.set.is_match(normalize(path.as_ref()))
    }

    /// Patterns that match the path, in declaration order.
    pub fn matching_patterns(&self, path: impl AsRef<Path>) -> Vec<&str> {
        self.set
            .matches(normalize(path.as_ref()))
            .into_iter()
            .map(|i| self.patterns[i].as_str())
            .collect()
    }

    /// Filter paths down to the ones in scope, each listed once.
    pub fn select<I, P>(&self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut seen = HashSet::new();
        paths
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| self.set.is_match(p) && seen.insert(p.clone()))
            .collect()
    }
}

/// Drop `.` components so `./src/a.ts` and `src/a.ts` are the same file.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
