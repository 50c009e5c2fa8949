//! Post-order directory renaming
//!
//! Second pass over a cloned tree. A directory is renamed only after every
//! descendant has been processed, so no stored child path is invalidated by
//! an ancestor moving first. Children are listed again at each visit because
//! earlier renames change what a listing returns.

use crate::report::RunReport;
use crate::system::System;
use crate::Result;
use gk_core::RenameRules;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Rename every directory under `root`, including `root` itself
///
/// Returns the path of `root` after the pass. Rename failures are logged and
/// counted; listing or stat failures abort.
pub fn rename_directories<S: System + ?Sized>(
    system: &S,
    root: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) -> Result<PathBuf> {
    info!("Start renaming folders in: {}", root.display());
    visit(system, root, rules, report)
}

fn visit<S: System + ?Sized>(
    system: &S,
    path: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) -> Result<PathBuf> {
    if !system.stat(path)?.is_dir() {
        return Ok(path.to_path_buf());
    }

    for child in system.list_dir(path)? {
        visit(system, &child, rules, report)?;
    }

    let Some(new_path) = renamed_path(path, rules) else {
        return Ok(path.to_path_buf());
    };

    match system.rename(path, &new_path) {
        Ok(()) => {
            report.dirs_renamed += 1;
            info!("Renamed directory: {} to {}", path.display(), new_path.display());
            Ok(new_path)
        }
        Err(e) => {
            report.failed += 1;
            warn!("Failed to rename directory {}: {e}", path.display());
            Ok(path.to_path_buf())
        }
    }
}

/// Target path for a directory whose name carries a placeholder
fn renamed_path(path: &Path, rules: &RenameRules) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if !rules.matches(name) {
        return None;
    }

    let new_name = rules.rename_dir(name);
    (new_name != name).then(|| path.with_file_name(new_name))
}
