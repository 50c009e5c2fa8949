//! Content and file-name rewriting
//!
//! First of the two passes over a cloned tree. Every regular file has its
//! placeholders replaced, is renamed when its own name carries a placeholder,
//! and is handed to the pipeline patcher. Directories are only descended
//! into; they are renamed by the second pass once this one has finished.
//!
//! Content is handled as UTF-8 text. A file that does not decode is reported
//! and left as it is, but its name is still rewritten.

use crate::patcher::patch_pipeline_file;
use crate::report::RunReport;
use crate::system::System;
use crate::{Error, Result};
use gk_core::RenameRules;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Rewrite every file under `root`
///
/// Per-file failures are logged and counted in `report`; only failures of the
/// traversal itself are returned.
pub fn rewrite_tree<S: System + ?Sized>(
    system: &S,
    root: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) -> Result<()> {
    info!("Start renaming content in folder: {}", root.display());
    visit(system, root, rules, report)
}

fn visit<S: System + ?Sized>(
    system: &S,
    path: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) -> Result<()> {
    if system.stat(path)?.is_dir() {
        for child in system.list_dir(path)? {
            visit(system, &child, rules, report)?;
        }
    } else {
        rewrite_file(system, path, rules, report);
    }
    Ok(())
}

/// Rewrite, rename and patch one file, counting what happened in `report`
fn rewrite_file<S: System + ?Sized>(
    system: &S,
    path: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) {
    match rewrite_content(system, path, rules) {
        Ok(true) => {
            report.files_rewritten += 1;
            debug!(path = %path.display(), "Updated file content");
        }
        Ok(false) => {}
        Err(e) => {
            report.failed += 1;
            warn!("Error updating file content in {}: {e}", path.display());
        }
    }

    let current = match rename_file(system, path, rules) {
        Ok(Some(renamed)) => {
            report.files_renamed += 1;
            info!("Renamed file: {} to {}", path.display(), renamed.display());
            renamed
        }
        Ok(None) => path.to_path_buf(),
        Err(e) => {
            report.failed += 1;
            warn!("Error renaming file {}: {e}", path.display());
            path.to_path_buf()
        }
    };

    match patch_pipeline_file(system, &current) {
        Ok(true) => {
            report.pipelines_patched += 1;
            info!("Patched pipeline paths: {}", current.display());
        }
        Ok(false) => {}
        Err(e) => {
            report.failed += 1;
            warn!("Error patching pipeline file {}: {e}", current.display());
        }
    }
}

/// Replace placeholders in the file content and write it back
///
/// Returns whether the content changed.
fn rewrite_content<S: System + ?Sized>(
    system: &S,
    path: &Path,
    rules: &RenameRules,
) -> Result<bool> {
    let content = system.read_file(path)?;
    let text = String::from_utf8(content).map_err(|e| Error::InvalidUtf8 {
        path: path.to_path_buf(),
        source: e,
    })?;

    let updated = rules.apply(&text);
    system.write_file(path, updated.as_bytes())?;

    Ok(updated != text)
}

/// Rename the file when its name carries a placeholder
///
/// Returns the new path, or `None` when the name stays the same.
fn rename_file<S: System + ?Sized>(
    system: &S,
    path: &Path,
    rules: &RenameRules,
) -> Result<Option<PathBuf>> {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return Ok(None);
    };
    if !rules.matches(name) {
        return Ok(None);
    }

    let new_name = rules.rename_file(name);
    if new_name == name {
        return Ok(None);
    }

    let new_path = path.with_file_name(new_name);
    system.rename(path, &new_path)?;
    Ok(Some(new_path))
}
