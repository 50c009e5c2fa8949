//! Copying the template into a fresh project root
//!
//! Directories named in the [`SkipSet`] are never copied, at any depth.
//! A failed copy is not rolled back.

use crate::report::RunReport;
use crate::system::System;
use crate::{Error, Result};
use gk_config::CopyItem;
use gk_core::SkipSet;
use std::path::Path;
use tracing::{debug, info};

/// Copy every manifest item in order
///
/// Items whose source does not exist are skipped silently. The first failure
/// aborts the whole copy, tagged with the item's source and destination.
pub fn copy_items<S: System + ?Sized>(
    system: &S,
    items: &[CopyItem],
    skip: &SkipSet,
    report: &mut RunReport,
) -> Result<()> {
    for item in items {
        copy_item(system, item, skip, report)
            .map_err(|e| Error::copy(&item.src, &item.dest, e))?;
    }
    Ok(())
}

fn copy_item<S: System + ?Sized>(
    system: &S,
    item: &CopyItem,
    skip: &SkipSet,
    report: &mut RunReport,
) -> Result<()> {
    if !system.exists(&item.src)? {
        debug!(src = %item.src.display(), "Source not present, nothing to copy");
        return Ok(());
    }

    copy_entry(system, &item.src, &item.dest, skip, report)
}

/// Recursively copy `src` to `dest`
///
/// Files are copied byte for byte, overwriting an existing destination.
pub fn copy_entry<S: System + ?Sized>(
    system: &S,
    src: &Path,
    dest: &Path,
    skip: &SkipSet,
    report: &mut RunReport,
) -> Result<()> {
    if system.stat(src)?.is_dir() {
        if skip.skips(src) {
            info!("Skipping directory: {}", src.display());
            report.dirs_skipped += 1;
            return Ok(());
        }

        system.create_dir_all(dest)?;

        for child in system.list_dir(src)? {
            let Some(name) = child.file_name() else {
                continue;
            };
            copy_entry(system, &child, &dest.join(name), skip, report)?;
        }
    } else {
        let content = system.read_file(src)?;
        system.write_file(dest, &content)?;
        report.files_copied += 1;
        debug!(src = %src.display(), dest = %dest.display(), "Copied file");
    }

    Ok(())
}
