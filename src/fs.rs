//! Filesystem access used by the scaffolder.
//! `LocalFilesystem` writes to disk, `MemoryFilesystem` records operations
//! in memory for tests.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Filesystem operations needed to lay out a project.
pub trait Filesystem {
    /// Creates a single directory. Fails if it already exists or its parent
    /// is missing.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Creates a directory and any missing parents; existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Writes `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<()> {
        std::fs::create_dir(path).map_err(Error::IoError)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(Error::IoError)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(Error::IoError)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

fn lock_poisoned() -> Error {
    Error::IoError(io::Error::other("memory filesystem lock poisoned"))
}

impl MemoryFilesystem {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filesystem where `root` and its ancestors already exist.
    pub fn with_root(root: &Path) -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            for ancestor in root.ancestors() {
                inner.directories.insert(ancestor.to_path_buf());
            }
        }
        fs
    }

    /// Reads a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Lists all files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Lists all directories, sorted by path.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' already exists", path.display()),
            )));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(Error::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent of '{}' does not exist", path.display()),
                )));
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            if inner.files.contains_key(ancestor) {
                return Err(Error::IoError(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("'{}' is a file", ancestor.display()),
                )));
            }
            inner.directories.insert(ancestor.to_path_buf());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(Error::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent of '{}' does not exist", path.display()),
                )));
            }
        }
        if inner.directories.contains(path) {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' is a directory", path.display()),
            )));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}
