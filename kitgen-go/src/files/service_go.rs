//! service.go generator.

use std::path::{Path, PathBuf};

use kitgen_codegen::builder::{InterfaceSpec, MethodSpec, TypeRef};
use kitgen_core::{FileRules, GeneratedFile, Overwrite};

use crate::{EntityImport, GoFile, Result, ServiceNames};

/// Placeholder comment inviting the user to extend the interface.
const PLACEHOLDER_COMMENT: &[&str] = &[
    "Add your methods here",
    "e.x: Foo(ctx context.Context, s string) (rs string, err error)",
];

/// The CRUD service interface for an entity imported from `entity_import`.
pub fn service_interface(names: &ServiceNames, entity_import: &str) -> InterfaceSpec {
    let ctx = || TypeRef::qualified("context", "Context");
    let entity = || TypeRef::qualified(entity_import, names.entity_type());
    let var = names.entity_var();

    InterfaceSpec::new(names.interface_name())
        .doc(format!("{} describes the service.", names.interface_name()))
        .method(
            MethodSpec::new("Create")
                .param("ctx", ctx())
                .param(var, TypeRef::pointer(entity()))
                .result("id", TypeRef::string())
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("Update")
                .param("ctx", ctx())
                .param(var, TypeRef::pointer(entity()))
                .result(format!("new{}", names.entity_type()), TypeRef::pointer(entity()))
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("GetOne")
                .param("ctx", ctx())
                .param("id", TypeRef::string())
                .result(var, TypeRef::pointer(entity()))
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("GetAllByOwner")
                .param("ctx", ctx())
                .param("ownerId", TypeRef::string())
                .result(var, TypeRef::slice(entity()))
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("GetAll")
                .param("ctx", ctx())
                .result(var, TypeRef::slice(entity()))
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("Delete")
                .param("ctx", ctx())
                .param("id", TypeRef::string())
                .result("err", TypeRef::error()),
        )
        .method(
            MethodSpec::new("DeleteSoft")
                .param("ctx", ctx())
                .param("id", TypeRef::string())
                .result("err", TypeRef::error()),
        )
}

/// The generated `service.go` of one service.
#[derive(Debug, Clone)]
pub struct ServiceGo {
    file_path: String,
    file: GoFile,
    overwrite: Overwrite,
}

impl ServiceGo {
    /// Build the file. Fails when a signature is invalid, e.g. an entity
    /// variable colliding with `ctx` or `id`.
    pub fn new(names: &ServiceNames, entity: &EntityImport) -> Result<Self> {
        let mut file = GoFile::new(names.package_name());
        if let Some(package) = &entity.package {
            file.declare_package(entity.path.clone(), package.clone());
        }
        file.add_comment(PLACEHOLDER_COMMENT);
        file.add_interface(service_interface(names, &entity.path))?;

        Ok(Self {
            file_path: names.file_path().to_string(),
            file,
            overwrite: Overwrite::Never,
        })
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn file(&self) -> &GoFile {
        &self.file
    }

    /// Path relative to the project root, `/`-separated.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl GeneratedFile for ServiceGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_path)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        self.file.render()
    }
}
