//! Language-agnostic method signatures.
//!
//! A [`MethodSpec`] is an ordered list of parameters and an ordered list of
//! named results. Order is positional and is preserved exactly.

use std::collections::HashSet;

use super::types::TypeRef;
use crate::{SignatureError, language::NamingConvention};

/// A declarative specification for a method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Parameters, in declaration order.
    pub params: Vec<ParamSpec>,
    /// Named results, in declaration order.
    pub results: Vec<ParamSpec>,
}

impl MethodSpec {
    /// Create a new method spec with no params or results.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(ParamSpec::new(name, ty));
        self
    }

    /// Add a named result.
    pub fn result(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.results.push(ParamSpec::new(name, ty));
        self
    }

    /// Iterate over every type referenced by this signature.
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.params.iter().chain(&self.results).map(|p| &p.ty)
    }

    /// Check that the signature is structurally valid for `naming`.
    ///
    /// The method name and every parameter/result name must be non-empty,
    /// valid and non-reserved identifiers, and parameter and result names
    /// must not repeat within the signature.
    pub fn validate(&self, naming: &NamingConvention) -> Result<(), SignatureError> {
        if self.name.is_empty() {
            return Err(SignatureError::EmptyName { kind: "method" });
        }
        naming.check_identifier(&self.name, "method declaration")?;

        let context = format!("method '{}'", self.name);
        let mut seen = HashSet::new();
        for param in self.params.iter().chain(&self.results) {
            if param.name.is_empty() {
                return Err(SignatureError::EmptyName { kind: "parameter" });
            }
            naming.check_identifier(&param.name, &context)?;
            if !seen.insert(param.name.as_str()) {
                return Err(SignatureError::DuplicateName {
                    name: param.name.clone(),
                    context,
                });
            }
        }
        Ok(())
    }
}

/// A named, typed parameter or result.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamSpec {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Trait for rendering method signatures to language-specific code.
pub trait SignatureRenderer {
    /// Render a full method signature (without trailing newline).
    fn render_method(&self, spec: &MethodSpec) -> String;

    /// Render a single parameter or result.
    fn render_param(&self, spec: &ParamSpec) -> String;
}
