//! Generated files.

mod compile_script;
mod service_go;

pub use compile_script::{CompileScript, Platform, render_script};
pub use service_go::{ServiceGo, service_interface};
