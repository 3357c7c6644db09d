//! Service generation pipeline.

use std::path::{Path, PathBuf};

use kitgen_config::Config;
use kitgen_core::{Filesystem, GeneratedFile, Overwrite, WriteResult};
use tracing::debug;

use crate::{
    CommandRunner, EntityImport, EntityResolver, ModuleInitializer, ModuleStatus, Result,
    ServiceGo, ServiceNames,
};

/// A request to scaffold one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub name: String,
    pub overwrite: Overwrite,
}

impl ServiceRequest {
    /// A request that refuses to replace an existing file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overwrite: Overwrite::Never,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// What a successful [`ServiceGenerator::generate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub names: ServiceNames,
    pub entity_import: EntityImport,
    pub file_path: PathBuf,
    pub module: ModuleStatus,
    pub write: WriteResult,
}

/// A rendered file that was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Scaffolds a Go service: directory, module descriptor and `service.go`.
pub struct ServiceGenerator<'a> {
    config: &'a Config,
    fs: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
    resolver: &'a dyn EntityResolver,
}

impl<'a> ServiceGenerator<'a> {
    pub fn new(
        config: &'a Config,
        fs: &'a dyn Filesystem,
        runner: &'a dyn CommandRunner,
        resolver: &'a dyn EntityResolver,
    ) -> Self {
        Self {
            config,
            fs,
            runner,
            resolver,
        }
    }

    /// Generate the service.
    ///
    /// Names and the entity import path are resolved first, so a bad name
    /// or an unknown entity leaves the filesystem untouched. A failing
    /// module init stops the run before `service.go` is written.
    pub fn generate(&self, request: &ServiceRequest) -> Result<GenerateReport> {
        let (names, entity_import, file) = self.build(request)?;

        let dest = Path::new(names.dest_path());
        self.fs.create_dir_all(dest)?;

        let module = ModuleInitializer::new(self.config, self.fs, self.runner)
            .ensure(dest, names.snake_name())?;
        debug!(?module, "module ready");

        let write = file.write(self.fs, Path::new(""))?;
        debug!(path = names.file_path(), ?write, "service file");

        Ok(GenerateReport {
            file_path: PathBuf::from(names.file_path()),
            names,
            entity_import,
            module,
            write,
        })
    }

    /// Render `service.go` without touching the filesystem or running
    /// anything.
    pub fn preview(&self, request: &ServiceRequest) -> Result<PreviewFile> {
        let (names, _, file) = self.build(request)?;
        Ok(PreviewFile {
            path: names.file_path().to_string(),
            content: file.render(),
        })
    }

    fn build(&self, request: &ServiceRequest) -> Result<(ServiceNames, EntityImport, ServiceGo)> {
        let names = ServiceNames::resolve(&request.name, self.config)?;
        let entity_import = self.resolver.resolve_entity(names.entity_type())?;
        debug!(
            interface = names.interface_name(),
            entity_import = %entity_import.path,
            entity_package = ?entity_import.package,
            dest = names.dest_path(),
            "resolved service names"
        );

        let file = ServiceGo::new(&names, &entity_import)?.with_overwrite(request.overwrite);
        Ok((names, entity_import, file))
    }
}
