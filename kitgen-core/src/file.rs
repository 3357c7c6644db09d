use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Filesystem operations needed by the generators.
///
/// Paths are interpreted relative to the implementation's root, so the
/// same generator can target a real directory or an in-memory tree.
pub trait Filesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write a file according to the overwrite policy.
    fn write_file(&self, path: &Path, contents: &str, overwrite: Overwrite) -> Result<WriteResult>;

    /// Location of `path` on the host, for handing to external processes.
    fn host_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file through the given filesystem
    fn write(&self, fs: &dyn Filesystem, base: &Path) -> Result<WriteResult> {
        fs.write_file(&self.path(base), &self.render(), self.rules().overwrite)
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist, otherwise skip silently
    IfMissing,
    /// Only create if file doesn't exist, otherwise report a conflict
    #[default]
    Never,
}

/// The local disk, rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a filesystem rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path against the root (absolute paths are kept as-is).
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn host_path(&self, path: &Path) -> PathBuf {
        self.resolve(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| Error::io("create directory", path, e))
    }

    fn write_file(&self, path: &Path, contents: &str, overwrite: Overwrite) -> Result<WriteResult> {
        let target = self.resolve(path);

        // Fast path only; persist_noclobber below is authoritative.
        if overwrite != Overwrite::Always && target.exists() {
            return existing(path, overwrite);
        }

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| Error::io("create directory", &parent, e))?;

        let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| Error::io("write", path, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| Error::io("write", path, e))?;

        match overwrite {
            Overwrite::Always => {
                tmp.persist(&target)
                    .map_err(|e| Error::io("write", path, e.error))?;
            }
            Overwrite::IfMissing | Overwrite::Never => match tmp.persist_noclobber(&target) {
                Ok(_) => {}
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    return existing(path, overwrite);
                }
                Err(e) => return Err(Error::io("write", path, e.error)),
            },
        }

        Ok(WriteResult::Written)
    }
}

/// Outcome for a target that already exists under a non-overwriting policy.
pub(crate) fn existing(path: &Path, overwrite: Overwrite) -> Result<WriteResult> {
    match overwrite {
        Overwrite::IfMissing => Ok(WriteResult::Skipped),
        _ => Err(Error::Conflict {
            path: path.to_path_buf(),
        }),
    }
}
