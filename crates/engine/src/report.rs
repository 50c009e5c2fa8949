//! Statistics collected over one clone-and-rename run

use std::path::PathBuf;
use std::time::Duration;

/// Counters for every pass of a run
///
/// Recoverable failures are counted here; fatal ones are returned as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files copied from the template
    pub files_copied: usize,
    /// Directories left out by the skip set
    pub dirs_skipped: usize,
    /// Files whose content changed
    pub files_rewritten: usize,
    /// Files renamed by the content pass
    pub files_renamed: usize,
    /// Directories renamed by the directory pass
    pub dirs_renamed: usize,
    /// Pipeline definitions with patched paths
    pub pipelines_patched: usize,
    /// Recoverable per-entry failures
    pub failed: usize,
    /// Path of the project root after the directory pass
    pub root: PathBuf,
    /// Wall time of the whole run
    pub elapsed: Duration,
}

impl RunReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any recoverable failure was counted
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Entries renamed by both passes
    pub fn renamed(&self) -> usize {
        self.files_renamed + self.dirs_renamed
    }
}
