//! Error types for gk-rename
//!
//! Every filesystem failure carries the offending path so that both fatal
//! errors and the warnings logged for recoverable ones point at a concrete
//! entry in the tree.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gk-rename operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type shared by all gk-rename crates
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading a file
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("Failed to write file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error creating a directory
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error listing a directory
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error with file metadata
    #[error("Failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error renaming a file or directory
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 and cannot be rewritten as text
    #[error("Invalid UTF-8 in {}: {source}", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Substitution rules violate their invariants
    #[error("Invalid rename rules: {0}")]
    InvalidRules(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Copying a manifest item failed
    #[error("Error copying from {} to {}: {source}", src.display(), dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// The traversal itself failed (directory listing or stat)
    #[error("Error renaming content in {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error raised while copying `src` to `dest`
    pub fn copy(src: impl Into<PathBuf>, dest: impl Into<PathBuf>, source: Error) -> Self {
        Error::Copy {
            src: src.into(),
            dest: dest.into(),
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while walking the tree under `root`
    pub fn walk(root: impl Into<PathBuf>, source: Error) -> Self {
        Error::Walk {
            root: root.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::io;

    #[test]
    fn test_copy_error_mentions_both_paths() {
        let inner = Error::FileRead {
            path: PathBuf::from("src/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = Error::copy("./src", "Cloned_HRMS/aspnet-core/src", inner);

        let message = err.to_string();
        assert!(message.contains("./src"));
        assert!(message.contains("Cloned_HRMS/aspnet-core/src"));
    }

    #[test]
    fn test_walk_error_keeps_inner_source() {
        let inner = Error::DirectoryRead {
            path: PathBuf::from("Cloned_HRMS/aspnet-core/src"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = Error::walk("Cloned_HRMS", inner);

        assert!(err.to_string().contains("Cloned_HRMS"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("aspnet-core/src"));
    }
}
