//! Structured Go source file.

use indexmap::IndexMap;
use kitgen_codegen::{
    CodeBuilder, CodeFragment, Renderable, SignatureError, builder::InterfaceSpec,
    generation::ImportCollector,
};

use crate::{
    GO_NAMING,
    ast::{GoInterface, ImportBlock},
};

/// A Go source file: package clause, imports, free-standing comment blocks
/// and interface declarations.
///
/// Imports are collected from the declarations as they are added, so the
/// rendered file never references a package it does not import.
///
/// # Example
///
/// ```
/// use kitgen_codegen::builder::{InterfaceSpec, MethodSpec, TypeRef};
/// use kitgen_go::GoFile;
///
/// let mut file = GoFile::new("service");
/// file.add_interface(
///     InterfaceSpec::new("Pinger")
///         .method(MethodSpec::new("Ping").param("ctx", TypeRef::qualified("context", "Context"))),
/// )
/// .unwrap();
///
/// assert_eq!(
///     file.render(),
///     "package service\n\nimport \"context\"\n\ntype Pinger interface {\n\tPing(ctx context.Context)\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    comments: Vec<String>,
    interfaces: Vec<InterfaceSpec>,
    imports: ImportCollector,
    packages: IndexMap<String, String>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            comments: Vec::new(),
            interfaces: Vec::new(),
            imports: ImportCollector::new(),
            packages: IndexMap::new(),
        }
    }

    /// Record the name declared by the package at `path`, for packages
    /// whose name differs from their last path segment.
    pub fn declare_package(
        &mut self,
        path: impl Into<String>,
        package: impl Into<String>,
    ) -> &mut Self {
        self.packages.insert(path.into(), package.into());
        self
    }

    /// Add a free-standing comment block placed after the imports.
    pub fn add_comment(&mut self, lines: &[&str]) -> &mut Self {
        self.comments.push(lines.join("\n"));
        self
    }

    /// Validate and add an interface, recording the imports it needs.
    pub fn add_interface(&mut self, spec: InterfaceSpec) -> Result<&mut Self, SignatureError> {
        spec.validate(&GO_NAMING)?;
        for ty in spec.types() {
            self.imports.add_type(ty);
        }
        self.interfaces.push(spec);
        Ok(self)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }

    pub fn interfaces(&self) -> &[InterfaceSpec] {
        &self.interfaces
    }

    /// Render the file as gofmt-formatted source.
    pub fn render(&self) -> String {
        let imports = ImportBlock::from_collector(&self.imports, &self.packages);
        let mapper = imports.type_mapper();

        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        sections.push(vec![CodeFragment::line(format!("package {}", self.package))]);
        if !imports.is_empty() {
            sections.push(imports.to_fragments());
        }
        for comment in &self.comments {
            sections.push(vec![CodeFragment::comment(comment.clone())]);
        }
        for spec in &self.interfaces {
            sections.push(GoInterface::new(spec, &mapper).to_fragments());
        }

        let mut builder = CodeBuilder::go();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}
