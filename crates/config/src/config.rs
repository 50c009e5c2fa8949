//! Configuration management
//!
//! This module handles loading the optional gk-rename configuration file.

use crate::{Error, Result};
use gk_core::SkipSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration file looked up in the template source directory
pub const CONFIG_FILE_NAME: &str = ".gk-rename.toml";

/// Copy configuration section
///
/// ```toml
/// [copy]
/// skipDirs = ["node_modules", "bin", "obj", ".vs"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CopyConfig {
    /// Directory names never copied from the template
    ///
    /// Replaces the built-in list when present.
    #[serde(default, rename = "skipDirs")]
    pub skip_dirs: SkipSet,
}

/// gk-rename configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Copy configuration section
    #[serde(default)]
    pub copy: CopyConfig,
}

impl Config {
    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or TOML parsing fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {e}"),
        })?;

        Self::from_toml_str(&content, path)
    }

    /// Parse configuration from TOML; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails
    pub fn from_toml_str(toml_content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(toml_content).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: format!("failed to parse: {e}"),
        })
    }

    /// Load `.gk-rename.toml` from the template source directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load_from_source(source_dir: &Path) -> Result<Self> {
        let config_path = source_dir.join(CONFIG_FILE_NAME);

        let exists = config_path.try_exists().map_err(|e| Error::Config {
            path: config_path.clone(),
            message: format!("failed to check: {e}"),
        })?;

        if !exists {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %config_path.display(), "Loading config file");
        Self::load(&config_path)
    }

    /// Resolve configuration for a run
    ///
    /// An explicit path must exist; otherwise the source directory is searched.
    ///
    /// # Errors
    ///
    /// Returns error if the explicit file is missing or any file fails to parse
    pub fn resolve(explicit: Option<&Path>, source_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_from_source(source_dir),
        }
    }

    /// Directory names excluded from copying
    pub fn skip_dirs(&self) -> &SkipSet {
        &self.copy.skip_dirs
    }
}
