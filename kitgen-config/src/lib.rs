//! Configuration for the kitgen scaffolder.
//!
//! The configuration is an immutable value read from `kitgen.toml` (or
//! built from defaults) and passed explicitly into every component.
//!
//! ```toml
//! service_path_format = "%s/pkg/service"
//! service_file_name = "service.go"
//! module_name = "github.com/acme/OrderSvc"
//!
//! [entities]
//! Order = "github.com/acme/shop/entity"
//! ```

mod config;
mod error;
mod parse;

pub use config::{
    CONFIG_FILE, Config, DEFAULT_GO_BINARY, DEFAULT_SERVICE_FILE_NAME, DEFAULT_SERVICE_PATH_FORMAT,
    PLACEHOLDER,
};
pub use error::{Error, Result, SourceContext};
pub use parse::parse_config;
