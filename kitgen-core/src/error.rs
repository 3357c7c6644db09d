use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for filesystem operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("refusing to overwrite existing file '{}'", path.display())]
    #[diagnostic(
        code(kitgen::write_conflict),
        help("pass --force to replace it, or move the existing file out of the way")
    )]
    Conflict { path: PathBuf },

    #[error("failed to {action} '{}'", path.display())]
    #[diagnostic(code(kitgen::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Check if this is a write conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }
}
