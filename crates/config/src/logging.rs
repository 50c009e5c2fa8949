//! Logging configuration for gk-rename
//!
//! Compact terminal output plus optional file logging using tracing.

use crate::{Error, Result};
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging and timestamps
/// * `log_file` - Optional path to append debug logs to
///
/// # Examples
/// ```ignore
/// // Basic usage with info level
/// init(false, None)?;
///
/// // Verbose mode, also writing to a file
/// init(true, Some(Path::new("gk-rename.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    // RUST_LOG takes precedence over the verbose flag
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "gk_rename={level},gk_engine={level},gk_config={level}"
        ))
    });

    let file_layer = log_file.map(file_layer).transpose()?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true);

    if verbose {
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer.with_filter(env_filter))
            .init();
    } else {
        // No timestamps in normal mode
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer.without_time().with_filter(env_filter))
            .init();
    }

    Ok(())
}

fn file_layer(log_path: &Path) -> Result<impl Layer<Registry> + Send + Sync> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| Error::FileWrite {
            path: log_path.to_path_buf(),
            source: e,
        })?;

    Ok(fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .with_filter(EnvFilter::new("debug")))
}
