//! Configuration management for gk-rename
//!
//! This crate handles:
//! - Loading the optional `.gk-rename.toml` configuration
//! - The fixed manifest of template paths copied into a new project
//! - Logging initialization

pub mod config;
pub mod logging;
pub mod manifest;

// Re-export error types from core
pub use gk_core::{Error, Result};

// Re-export main types
pub use config::{CONFIG_FILE_NAME, Config, CopyConfig};
pub use manifest::{CopyItem, template_manifest};
