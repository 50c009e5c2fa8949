//! # gk-rename engine
//!
//! Turns a template checkout into a freshly named project:
//!
//! - **Copier**: copies the template manifest into a new root, skipping build output
//! - **Rewriter**: replaces placeholders in file contents and file names
//! - **Patcher**: fixes path prefixes in the CI pipeline definition
//! - **Renamer**: renames directories bottom-up once their contents are done
//! - **System**: filesystem operations abstracted for testing

pub mod copier;
pub mod patcher;
pub mod pipeline;
pub mod renamer;
pub mod report;
pub mod rewriter;
pub mod system;

// Re-export error types from core
pub use gk_core::{Error, Result};

// Re-export commonly used types
pub use pipeline::{ClonePlan, clone_project, rename_project};
pub use report::RunReport;
pub use system::{EntryKind, MemorySystem, RealSystem, System};
