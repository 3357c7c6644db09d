//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod output;
mod script;
mod service;

pub use output::{Output, Report, TerminalOutput};
pub use script::ScriptReport;
pub use service::{PreviewReport, ServiceReport};
