//! Go type mapper implementation.

use indexmap::IndexMap;
use kitgen_codegen::builder::{PrimitiveType, TypeMapper};

use crate::ast::default_qualifier;

/// Go type mapper.
///
/// Qualified types render as `<qualifier>.<Name>`, where the qualifier is
/// the package name chosen by the file's import block.
#[derive(Debug, Clone, Default)]
pub struct GoTypeMapper {
    qualifiers: IndexMap<String, String>,
}

impl GoTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `qualifier` for types imported from `path`.
    pub fn with_qualifier(mut self, path: impl Into<String>, qualifier: impl Into<String>) -> Self {
        self.qualifiers.insert(path.into(), qualifier.into());
        self
    }

    /// The qualifier used for `path`.
    pub fn qualifier(&self, path: &str) -> String {
        self.qualifiers
            .get(path)
            .cloned()
            .unwrap_or_else(|| default_qualifier(path))
    }
}

impl TypeMapper for GoTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float64",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Error => "error",
        }
        .to_string()
    }

    fn map_qualified(&self, path: &str, name: &str) -> String {
        format!("{}.{}", self.qualifier(path), name)
    }

    fn map_pointer(&self, inner: &str) -> String {
        format!("*{}", inner)
    }

    fn map_slice(&self, inner: &str) -> String {
        format!("[]{}", inner)
    }
}
