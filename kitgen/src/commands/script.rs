use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use kitgen_core::{GeneratedFile, LocalFs, Overwrite};
use kitgen_go::{CompileScript, Platform, render_script};
use tracing::info;

use super::UnwrapOrExit;
use crate::reports::{Report, ScriptReport, TerminalOutput};

#[derive(Args)]
pub struct ScriptCommand {
    /// Proto file passed to protoc
    pub proto: String,

    /// Target platform: windows, darwin or posix (defaults to the host)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Write compile.sh / compile.bat into this directory instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing script
    #[arg(short, long)]
    pub force: bool,
}

impl ScriptCommand {
    pub fn run(&self) -> Result<()> {
        let platform = self.platform();

        let Some(dir) = &self.output else {
            print!("{}", render_script(platform, &self.proto));
            return Ok(());
        };

        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::Never
        };
        let script = CompileScript::new(platform, &self.proto).with_overwrite(overwrite);
        let fs = LocalFs::new(dir);
        info!(%platform, dir = %dir.display(), "writing compile script");
        let write = script.write(&fs, Path::new("")).unwrap_or_exit();

        ScriptReport {
            platform,
            path: script.path(dir),
            write,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }

    fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .map(Platform::from_name)
            .unwrap_or_else(Platform::host)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_platform_defaults_to_host() {
        let cmd = ScriptCommand {
            proto: "order.proto".to_string(),
            platform: None,
            output: None,
            force: false,
        };
        assert_eq!(cmd.platform(), Platform::host());
    }

    #[test]
    fn test_writes_script_into_output_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = ScriptCommand {
            proto: "order.proto".to_string(),
            platform: Some("windows".to_string()),
            output: Some(temp.path().to_path_buf()),
            force: false,
        };

        cmd.run().unwrap();

        let script = fs::read_to_string(temp.path().join("compile.bat")).unwrap();
        assert_eq!(script, render_script(Platform::Windows, "order.proto"));
    }
}
