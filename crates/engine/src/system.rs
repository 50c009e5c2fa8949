//! System abstraction for filesystem operations
//!
//! Every pass of the engine talks to the filesystem through [`System`], which
//! keeps the traversal logic independent of the backend:
//! - [`RealSystem`]: actual filesystem operations
//! - [`MemorySystem`]: an in-memory tree used by tests

use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory
    Directory,
}

impl EntryKind {
    /// Whether this is a directory
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// Abstraction over filesystem operations
pub trait System {
    /// Get the kind of an existing entry
    fn stat(&self, path: &Path) -> Result<EntryKind>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Read a file's contents
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write a file's contents, creating parent directories as needed
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Create a single directory; fails if it already exists
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// List the children of a directory, sorted by file name
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Rename a file or directory
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Real filesystem implementation
pub struct RealSystem;

impl System for RealSystem {
    fn stat(&self, path: &Path) -> Result<EntryKind> {
        let metadata = fs::metadata(path).map_err(|e| Error::Metadata {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(|e| Error::Metadata {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.create_dir_all(parent)?;
        }

        fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).map_err(|e| Error::DirectoryCreate {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                entry
                    .map(walkdir::DirEntry::into_path)
                    .map_err(|e| Error::DirectoryRead {
                        path: path.to_path_buf(),
                        source: e.into(),
                    })
            })
            .collect()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| Error::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Directory,
}

/// In-memory filesystem
///
/// Paths are stored as given, minus `.` components; the empty path and `/`
/// are implicit, always-present directories so relative trees work like a
/// working directory. Failures can be injected per path with
/// [`MemorySystem::deny_writes`] and [`MemorySystem::deny_reads`].
#[derive(Debug, Default)]
pub struct MemorySystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    denied_writes: RefCell<BTreeSet<PathBuf>>,
    denied_reads: RefCell<BTreeSet<PathBuf>>,
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn io_error(kind: io::ErrorKind) -> io::Error {
    io::Error::from(kind)
}

impl MemorySystem {
    /// Create an empty in-memory filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper: add a file (parents are created)
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.insert_file(path.as_ref(), content.as_ref());
        self
    }

    /// Builder helper: add a directory (parents are created)
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(&normalize(path.as_ref()));
        self
    }

    /// Make every later write to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        self.denied_writes
            .borrow_mut()
            .insert(normalize(path.as_ref()));
    }

    /// Make every later read or listing of `path` fail with `PermissionDenied`
    pub fn deny_reads(&self, path: impl AsRef<Path>) {
        self.denied_reads
            .borrow_mut()
            .insert(normalize(path.as_ref()));
    }

    /// Content of a file, if `path` is a file
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(&normalize(path.as_ref())) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Content of a file as UTF-8 text
    pub fn file_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.file(path)
            .and_then(|content| String::from_utf8(content).ok())
    }

    /// Whether `path` is a directory
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.node(&normalize(path.as_ref())), Some(Node::Directory))
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }

    fn node(&self, path: &Path) -> Option<Node> {
        // "" and "/" are always present
        if path.parent().is_none() {
            return Some(Node::Directory);
        }
        self.nodes.borrow().get(path).cloned()
    }

    fn insert_file(&self, path: &Path, content: &[u8]) {
        let path = normalize(path);
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path, Node::File(content.to_vec()));
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.parent().is_none() {
                continue;
            }
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Directory);
        }
    }

    fn check_read(&self, path: &Path) -> io::Result<()> {
        if self.denied_reads.borrow().contains(path) {
            return Err(io_error(io::ErrorKind::PermissionDenied));
        }
        Ok(())
    }
}

impl System for MemorySystem {
    fn stat(&self, path: &Path) -> Result<EntryKind> {
        match self.node(&normalize(path)) {
            Some(Node::Directory) => Ok(EntryKind::Directory),
            Some(Node::File(_)) => Ok(EntryKind::File),
            None => Err(Error::Metadata {
                path: path.to_path_buf(),
                source: io_error(io::ErrorKind::NotFound),
            }),
        }
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.node(&normalize(path)).is_some())
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let key = normalize(path);
        let result = self.check_read(&key).and_then(|()| match self.node(&key) {
            Some(Node::File(content)) => Ok(content),
            Some(Node::Directory) => Err(io_error(io::ErrorKind::IsADirectory)),
            None => Err(io_error(io::ErrorKind::NotFound)),
        });

        result.map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        let key = normalize(path);
        if let Some(parent) = key.parent()
            && !parent.as_os_str().is_empty()
        {
            self.create_dir_all(parent)?;
        }

        let denied = self.denied_writes.borrow().contains(&key);
        let failure = if denied {
            Some(io::ErrorKind::PermissionDenied)
        } else if let Some(Node::Directory) = self.node(&key) {
            Some(io::ErrorKind::IsADirectory)
        } else {
            None
        };

        if let Some(kind) = failure {
            return Err(Error::FileWrite {
                path: path.to_path_buf(),
                source: io_error(kind),
            });
        }

        self.nodes
            .borrow_mut()
            .insert(key, Node::File(content.to_vec()));
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let key = normalize(path);
        let parent_is_dir = key
            .parent()
            .is_none_or(|parent| matches!(self.node(parent), Some(Node::Directory)));

        let failure = if self.node(&key).is_some() {
            Some(io::ErrorKind::AlreadyExists)
        } else if !parent_is_dir {
            Some(io::ErrorKind::NotFound)
        } else {
            None
        };

        if let Some(kind) = failure {
            return Err(Error::DirectoryCreate {
                path: path.to_path_buf(),
                source: io_error(kind),
            });
        }

        self.nodes.borrow_mut().insert(key, Node::Directory);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let key = normalize(path);
        let blocked = key
            .ancestors()
            .any(|ancestor| matches!(self.node(ancestor), Some(Node::File(_))));

        if blocked {
            return Err(Error::DirectoryCreate {
                path: path.to_path_buf(),
                source: io_error(io::ErrorKind::NotADirectory),
            });
        }

        self.insert_dirs(&key);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let key = normalize(path);
        let read_error = |kind| Error::DirectoryRead {
            path: path.to_path_buf(),
            source: io_error(kind),
        };

        if self.check_read(&key).is_err() {
            return Err(read_error(io::ErrorKind::PermissionDenied));
        }
        match self.node(&key) {
            Some(Node::Directory) => {}
            Some(Node::File(_)) => return Err(read_error(io::ErrorKind::NotADirectory)),
            None => return Err(read_error(io::ErrorKind::NotFound)),
        }

        Ok(self
            .nodes
            .borrow()
            .keys()
            .filter(|child| child.parent() == Some(key.as_path()))
            .cloned()
            .collect())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let source_key = normalize(from);
        let target_key = normalize(to);
        let rename_error = |kind| Error::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: io_error(kind),
        };

        if source_key == target_key {
            return Ok(());
        }

        let Some(source_node) = self.node(&source_key) else {
            return Err(rename_error(io::ErrorKind::NotFound));
        };
        if source_key.parent().is_none() || target_key.starts_with(&source_key) {
            return Err(rename_error(io::ErrorKind::InvalidInput));
        }
        if let Some(parent) = target_key.parent()
            && !matches!(self.node(parent), Some(Node::Directory))
        {
            return Err(rename_error(io::ErrorKind::NotFound));
        }
        match (&source_node, self.node(&target_key)) {
            (_, None) | (Node::File(_), Some(Node::File(_))) => {}
            (Node::Directory, Some(Node::File(_))) => {
                return Err(rename_error(io::ErrorKind::NotADirectory));
            }
            (_, Some(Node::Directory)) => {
                return Err(rename_error(io::ErrorKind::AlreadyExists));
            }
        }

        let mut nodes = self.nodes.borrow_mut();
        let moved: Vec<PathBuf> = nodes
            .keys()
            .filter(|key| key.starts_with(&source_key))
            .cloned()
            .collect();

        for old_key in moved {
            if let Some(node) = nodes.remove(&old_key)
                && let Ok(suffix) = old_key.strip_prefix(&source_key)
            {
                let new_key = if suffix.as_os_str().is_empty() {
                    target_key.clone()
                } else {
                    target_key.join(suffix)
                };
                nodes.insert(new_key, node);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_write_creates_parents() {
        let system = MemorySystem::new();
        system
            .write_file(Path::new("a/b/c.txt"), b"hello")
            .unwrap();

        assert!(system.is_dir("a"));
        assert!(system.is_dir("a/b"));
        assert_eq!(system.file("a/b/c.txt").unwrap(), b"hello");
    }

    #[test]
    fn test_memory_ignores_current_dir_components() {
        let system = MemorySystem::new().with_file("./src/a.txt", "x");

        assert_eq!(system.stat(Path::new("src/a.txt")).unwrap(), EntryKind::File);
        assert!(system.exists(Path::new("./src")).unwrap());
    }

    #[test]
    fn test_memory_list_dir_is_sorted_and_shallow() {
        let system = MemorySystem::new()
            .with_file("root/b.txt", "")
            .with_file("root/a/nested.txt", "")
            .with_dir("root/c");

        let children = system.list_dir(Path::new("root")).unwrap();

        assert_eq!(
            children,
            vec![
                PathBuf::from("root/a"),
                PathBuf::from("root/b.txt"),
                PathBuf::from("root/c"),
            ]
        );
    }

    #[test]
    fn test_memory_rename_moves_subtree() {
        let system = MemorySystem::new()
            .with_file("src/Old/x.txt", "1")
            .with_file("src/Old/deep/y.txt", "2");

        system
            .rename(Path::new("src/Old"), Path::new("src/New"))
            .unwrap();

        assert!(!system.exists(Path::new("src/Old")).unwrap());
        assert_eq!(system.file_string("src/New/x.txt").unwrap(), "1");
        assert_eq!(system.file_string("src/New/deep/y.txt").unwrap(), "2");
    }

    #[test]
    fn test_memory_rename_missing_source() {
        let system = MemorySystem::new();
        let err = system
            .rename(Path::new("nope"), Path::new("other"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_memory_create_dir_rejects_existing() {
        let system = MemorySystem::new().with_dir("Cloned_HRMS");
        assert!(system.create_dir(Path::new("Cloned_HRMS")).is_err());
        assert!(system.create_dir(Path::new("missing/child")).is_err());
        assert!(system.create_dir(Path::new("Cloned_X")).is_ok());
    }

    #[test]
    fn test_memory_denied_write() {
        let system = MemorySystem::new().with_file("a.txt", "x");
        system.deny_writes("a.txt");

        let err = system.write_file(Path::new("a.txt"), b"y").unwrap_err();

        assert!(matches!(err, Error::FileWrite { .. }));
        assert_eq!(system.file_string("a.txt").unwrap(), "x");
    }

    #[test]
    fn test_memory_denied_read_blocks_listing() {
        let system = MemorySystem::new().with_file("dir/a.txt", "x");
        system.deny_reads("dir");

        assert!(matches!(
            system.list_dir(Path::new("dir")).unwrap_err(),
            Error::DirectoryRead { .. }
        ));
    }

    #[test]
    fn test_real_system_roundtrip() {
        let temp = TempDir::new().unwrap();
        let system = RealSystem;
        let file = temp.path().join("nested/dir/file.txt");

        system.write_file(&file, b"content").unwrap();

        assert_eq!(system.read_file(&file).unwrap(), b"content");
        assert_eq!(system.stat(&file).unwrap(), EntryKind::File);
        assert!(system.stat(&temp.path().join("nested")).unwrap().is_dir());
    }

    #[test]
    fn test_real_system_list_dir_sorted() {
        let temp = TempDir::new().unwrap();
        let system = RealSystem;
        for name in ["b", "a", "c"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let children = system.list_dir(temp.path()).unwrap();

        let names: Vec<_> = children
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_real_system_exists() {
        let temp = TempDir::new().unwrap();
        let system = RealSystem;

        assert!(system.exists(temp.path()).unwrap());
        assert!(!system.exists(&temp.path().join("missing")).unwrap());
    }
}
