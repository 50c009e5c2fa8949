//! Error types for the gk-rename CLI

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a clone
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// The new project root is already there
    #[error("Project root already exists: {}", .0.display())]
    RootExists(PathBuf),

    /// The template source directory is missing
    #[error("Template directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Engine, configuration or filesystem error
    #[error(transparent)]
    Engine(#[from] gk_core::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
