//! Go service scaffolding for kitgen.
//!
//! Given a short entity name this crate derives the Go names and paths for
//! a service, makes sure the target directory is a Go module, and writes a
//! `service.go` holding a documented CRUD interface. It also renders the
//! per-platform `protoc` compile scripts.
//!
//! ```ignore
//! use kitgen_config::Config;
//! use kitgen_core::LocalFs;
//! use kitgen_go::{ServiceGenerator, ServiceRequest, SourceTreeResolver, SystemRunner};
//!
//! let config = Config::discover(".")?;
//! let fs = LocalFs::new(".");
//! let resolver = SourceTreeResolver::new(".").with_overrides(config.entities.clone());
//! let runner = SystemRunner::new();
//!
//! let report = ServiceGenerator::new(&config, &fs, &runner, &resolver)
//!     .generate(&ServiceRequest::new("Order"))?;
//! ```

mod error;
mod generator;
mod go_file;
mod module;
mod naming;
mod resolve;
mod type_mapper;

pub mod ast;
pub mod files;

pub use error::{Error, Result};
pub use files::{CompileScript, Platform, ServiceGo, render_script, service_interface};
pub use generator::{GenerateReport, PreviewFile, ServiceGenerator, ServiceRequest};
pub use go_file::GoFile;
pub use module::{
    CommandOutput, CommandRunner, ModuleInitializer, ModuleStatus, Shell, ShellCommand,
    SystemRunner, module_name,
};
pub use naming::{GO_NAMING, ServiceNames, go_package_name};
pub use resolve::{EntityImport, EntityResolver, SourceTreeResolver};
pub use type_mapper::GoTypeMapper;
