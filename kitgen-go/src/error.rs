use std::path::PathBuf;

use kitgen_codegen::SignatureError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for Go generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid service name '{name}': {reason}")]
    #[diagnostic(
        code(kitgen::invalid_name),
        help("use a short entity name such as `Order` or `order_item`")
    )]
    InvalidName { name: String, reason: String },

    #[error("cannot resolve the import path of entity '{entity}': {reason}")]
    #[diagnostic(
        code(kitgen::entity_resolution),
        help("map the entity explicitly in kitgen.toml, e.g. `[entities]` `{entity} = \"example.com/app/entity\"`")
    )]
    Resolution { entity: String, reason: String },

    #[error("module initialization failed: {shell} {command} (in '{}') => {status}, {stderr}", dir.display())]
    #[diagnostic(
        code(kitgen::module_init),
        help("check that the Go toolchain is installed and on PATH, or set `go_binary` in kitgen.toml")
    )]
    ModuleInit {
        shell: String,
        command: String,
        dir: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("refusing to overwrite existing file '{}'", path.display())]
    #[diagnostic(
        code(kitgen::write_conflict),
        help("pass --force to replace it, or move the existing file out of the way")
    )]
    Conflict { path: PathBuf },

    #[error("failed to {action} '{}'", path.display())]
    #[diagnostic(code(kitgen::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Signature(#[from] SignatureError),
}

impl Error {
    /// Check if this is a write conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }
}

impl From<kitgen_core::Error> for Error {
    fn from(err: kitgen_core::Error) -> Self {
        match err {
            kitgen_core::Error::Conflict { path } => Error::Conflict { path },
            kitgen_core::Error::Io {
                action,
                path,
                source,
            } => Error::Io {
                action,
                path,
                source,
            },
        }
    }
}
