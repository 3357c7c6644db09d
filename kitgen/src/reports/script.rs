//! `script` report.

use std::path::PathBuf;

use kitgen_core::WriteResult;
use kitgen_go::Platform;

use super::output::{Output, Report};

/// A compile script written to disk.
#[derive(Debug)]
pub struct ScriptReport {
    pub platform: Platform,
    pub path: PathBuf,
    pub write: WriteResult,
}

impl Report for ScriptReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.write {
            WriteResult::Written => out.added_item(&format!("{} ({})", path, self.platform)),
            WriteResult::Skipped => out.kept_item(&format!("{} (exists, skipped)", path)),
        }
    }
}
