//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//!
//! # Declarative Specifications
//!
//! - [`InterfaceSpec`] - Interface declarations with ordered methods
//! - [`MethodSpec`], [`ParamSpec`] - Method signatures with ordered params and results
//! - [`TypeRef`] - Language-agnostic type references, including qualified imports
//! - [`TypeMapper`], [`SignatureRenderer`] - Traits for language-specific rendering

mod code_builder;
mod interface;
mod method;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use interface::InterfaceSpec;
pub use method::{MethodSpec, ParamSpec, SignatureRenderer};
pub use renderable::{CodeFragment, Renderable};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
