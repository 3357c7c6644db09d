//! Shared code generation utilities for the kitgen scaffolder.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `kitgen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, InterfaceSpec, MethodSpec, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language-specific abstractions (NamingConvention)

pub mod builder;
pub mod generation;
pub mod language;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use error::SignatureError;
