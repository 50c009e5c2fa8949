//! Whole-run orchestration
//!
//! The content/file pass and the directory pass are kept as two sequential
//! traversals: every directory must still have its original path while
//! files under it are rewritten.

use crate::copier::copy_items;
use crate::renamer::rename_directories;
use crate::report::RunReport;
use crate::rewriter::rewrite_tree;
use crate::system::System;
use crate::{Error, Result};
use gk_config::template_manifest;
use gk_core::{RenameRules, SkipSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Inputs for cloning a template into a new project
#[derive(Debug, Clone)]
pub struct ClonePlan {
    /// Template checkout to copy from
    pub source_dir: PathBuf,
    /// Directory in which the new root is created
    pub dest_dir: PathBuf,
    /// Substitutions applied to the new tree
    pub rules: RenameRules,
    /// Directory names never copied
    pub skip: SkipSet,
}

impl ClonePlan {
    /// Path of the root directory this plan creates
    pub fn root(&self) -> PathBuf {
        self.dest_dir.join(self.rules.root_dir_name())
    }
}

/// Create the new root, copy the template into it and rename everything
///
/// The root must not exist yet.
pub fn clone_project<S: System + ?Sized>(system: &S, plan: &ClonePlan) -> Result<RunReport> {
    let started = Instant::now();
    let root = plan.root();
    info!("Start renaming process...");

    system.create_dir(&root)?;

    let mut report = RunReport::new();
    let items = template_manifest(
        &plan.source_dir,
        &root,
        plan.rules.project().placeholder(),
    );
    copy_items(system, &items, &plan.skip, &mut report)?;

    run_passes(system, &root, &plan.rules, &mut report)?;

    report.elapsed = started.elapsed();
    info!("Renaming process completed in {:?}", report.elapsed);
    Ok(report)
}

/// Rewrite and rename an existing tree in place
pub fn rename_project<S: System + ?Sized>(
    system: &S,
    root: &Path,
    rules: &RenameRules,
) -> Result<RunReport> {
    let started = Instant::now();
    let mut report = RunReport::new();

    run_passes(system, root, rules, &mut report)?;

    report.elapsed = started.elapsed();
    Ok(report)
}

fn run_passes<S: System + ?Sized>(
    system: &S,
    root: &Path,
    rules: &RenameRules,
    report: &mut RunReport,
) -> Result<()> {
    rewrite_tree(system, root, rules, report).map_err(|e| Error::walk(root, e))?;
    report.root =
        rename_directories(system, root, rules, report).map_err(|e| Error::walk(root, e))?;
    Ok(())
}
