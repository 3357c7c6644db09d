//! Go syntax nodes rendered through [`CodeBuilder`](kitgen_codegen::CodeBuilder).

mod imports;
mod interface;

pub use imports::{GoImport, ImportBlock, default_qualifier, is_stdlib, path_package};
pub use interface::GoInterface;
