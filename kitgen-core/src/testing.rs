//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    process::Command,
};

use crate::{Filesystem, Overwrite, Result, WriteResult, file::existing};

/// Error from compile checking.
#[derive(Debug, thiserror::Error)]
#[error("{message}\n\nOutput:\n{output}")]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

/// Trait for verifying generated code compiles/type-checks.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> std::result::Result<(), CompileError>;
}

/// Go checker running `go vet ./...`, which type-checks every package
/// of the module in `dir` before vetting it.
#[derive(Debug, Clone)]
pub struct GoChecker {
    binary: String,
}

impl GoChecker {
    pub fn new() -> Self {
        Self::with_binary("go")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Whether the Go toolchain can be started.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("version")
            .output()
            .is_ok_and(|output| output.status.success())
    }
}

impl Default for GoChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileChecker for GoChecker {
    fn check(&self, dir: &Path) -> std::result::Result<(), CompileError> {
        let output = Command::new(&self.binary)
            .args(["vet", "./..."])
            .current_dir(dir)
            .env("GOWORK", "off")
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run go vet: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "go vet failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// An in-memory [`Filesystem`] for exercising generators without touching disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files.borrow_mut().insert(path, contents.into());
        self
    }

    /// Read a file's contents.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Check whether a directory was created.
    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    /// All file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn add_parents(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_parents(path);
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str, overwrite: Overwrite) -> Result<WriteResult> {
        if overwrite != Overwrite::Always && self.files.borrow().contains_key(path) {
            return existing(path, overwrite);
        }
        self.add_parents(path);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(WriteResult::Written)
    }
}
