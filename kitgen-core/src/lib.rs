//! Core utilities and types for the kitgen scaffolder.
//!
//! This crate provides the filesystem seam, file write policies and the
//! casing/path helpers shared across the kitgen workspace.

mod error;
mod file;
mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
// File operations
pub use file::{FileRules, Filesystem, GeneratedFile, LocalFs, Overwrite, WriteResult};
// String utilities
pub use utils::{
    join_path, last_segment, normalize_path, to_camel_case, to_pascal_case, to_snake_case,
};
