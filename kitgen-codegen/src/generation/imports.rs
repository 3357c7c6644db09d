//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::builder::TypeRef;

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order of import paths; the symbols used from each
/// path are kept sorted.
///
/// # Example
///
/// ```
/// use kitgen_codegen::builder::TypeRef;
/// use kitgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_type(&TypeRef::qualified("context", "Context"));
/// imports.add_type(&TypeRef::pointer(TypeRef::qualified("github.com/acme/shop/entity", "Order")));
/// imports.add_type(&TypeRef::string());
///
/// let paths: Vec<&str> = imports.iter().map(|(path, _)| path).collect();
/// assert_eq!(paths, ["context", "github.com/acme/shop/entity"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Import path -> set of symbols referenced from it
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a symbol used from an import path.
    pub fn add(&mut self, path: &str, symbol: &str) {
        self.imports
            .entry(path.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Record the import needed by a type reference, if any.
    pub fn add_type(&mut self, ty: &TypeRef) {
        if let Some((path, name)) = ty.qualification() {
            self.add(path, name);
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of import paths.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
