//! Language-agnostic interface declarations.

use std::collections::HashSet;

use super::{method::MethodSpec, types::TypeRef};
use crate::{SignatureError, language::NamingConvention};

/// A declarative specification for an interface: a named, documented,
/// ordered set of method signatures.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSpec {
    /// Interface name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Methods, in declaration order.
    pub methods: Vec<MethodSpec>,
}

impl InterfaceSpec {
    /// Create a new interface spec with no methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Iterate over every type referenced by any method.
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.methods.iter().flat_map(MethodSpec::types)
    }

    /// Validate the interface name, each method and method-name uniqueness.
    pub fn validate(&self, naming: &NamingConvention) -> Result<(), SignatureError> {
        if self.name.is_empty() {
            return Err(SignatureError::EmptyName { kind: "interface" });
        }
        naming.check_identifier(&self.name, "interface declaration")?;

        let mut seen = HashSet::new();
        for method in &self.methods {
            method.validate(naming)?;
            if !seen.insert(method.name.as_str()) {
                return Err(SignatureError::DuplicateName {
                    name: method.name.clone(),
                    context: format!("interface '{}'", self.name),
                });
            }
        }
        Ok(())
    }
}
