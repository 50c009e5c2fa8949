//! Template paths copied into a new project
//!
//! The backend of the template moves one level down, under `aspnet-core/`,
//! while repository metadata such as `.github/` stays at the new root.

use std::path::{Path, PathBuf};

/// Subdirectory of the new root holding the backend solution
pub const BACKEND_DIR: &str = "aspnet-core";

/// A `(source, destination)` pair copied by the tree copier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyItem {
    /// Path inside the template
    pub src: PathBuf,
    /// Path inside the new project root
    pub dest: PathBuf,
}

impl CopyItem {
    /// Create a copy item
    pub fn new(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
        }
    }
}

/// Build the ordered copy manifest
///
/// `source_dir` is the template checkout, `root` the freshly created project
/// root and `project_key` the old project name, which also names the solution file.
pub fn template_manifest(source_dir: &Path, root: &Path, project_key: &str) -> Vec<CopyItem> {
    let backend = root.join(BACKEND_DIR);
    let solution = format!("{project_key}.sln");

    let backend_entries = ["src", "tests", ".vscode"];
    let backend_files = [
        solution.as_str(),
        ".gitignore",
        "add_migration.bat",
        "Makefile",
        "run.bat",
    ];

    let mut items: Vec<CopyItem> = backend_entries
        .iter()
        .map(|name| CopyItem::new(source_dir.join(name), backend.join(name)))
        .collect();

    items.push(CopyItem::new(source_dir.join(".github"), root.join(".github")));

    items.extend(
        backend_files
            .iter()
            .map(|name| CopyItem::new(source_dir.join(name), backend.join(name))),
    );

    items
}
