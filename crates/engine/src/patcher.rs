//! Path patching for the CI pipeline definition
//!
//! The backend moves under `aspnet-core/` in a cloned project, so the quoted
//! `src/` and `tests/` references in the build workflow gain that prefix.

use crate::system::System;
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Base name of the pipeline definition that gets patched
pub const PIPELINE_FILE_NAME: &str = "build-and-test.yml";

/// Literal replacements, applied in order
const PATH_PATCHES: [(&str, &str); 3] = [
    ("\"src/", "\"aspnet-core/src/"),
    ("\"tests/", "\"aspnet-core/tests/"),
    ("\"./tests", "\"./aspnet-core/tests"),
];

/// Whether `path` names the pipeline definition
pub fn is_pipeline_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name == PIPELINE_FILE_NAME)
}

/// Insert the backend prefix into quoted path fragments
pub fn patch_pipeline_content(content: &str) -> String {
    PATH_PATCHES
        .iter()
        .fold(content.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Patch the pipeline definition at `path`
///
/// Returns `Ok(false)` without touching anything when `path` is not the
/// pipeline definition.
pub fn patch_pipeline_file<S: System + ?Sized>(system: &S, path: &Path) -> Result<bool> {
    if !is_pipeline_file(path) {
        return Ok(false);
    }

    debug!(path = %path.display(), "Patching pipeline paths");

    let content = system.read_file(path)?;
    let text = String::from_utf8(content).map_err(|e| Error::InvalidUtf8 {
        path: path.to_path_buf(),
        source: e,
    })?;

    system.write_file(path, patch_pipeline_content(&text).as_bytes())?;
    Ok(true)
}
