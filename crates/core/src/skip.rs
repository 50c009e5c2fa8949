//! Directory names excluded from copying

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dependency caches and build output that never belong in a fresh project
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "bin", "obj"];

/// Set of bare directory names (not paths) skipped by the tree copier
///
/// Names are matched against the base name of a directory only, at any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipSet(IndexSet<String>);

impl SkipSet {
    /// Check a bare directory name
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Check the base name of a path
    pub fn skips(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.contains(name))
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        DEFAULT_SKIP_DIRS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
