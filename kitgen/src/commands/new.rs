use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::Result;
use kitgen_config::{Config, SourceContext};
use kitgen_core::{LocalFs, Overwrite};
use kitgen_go::{ServiceGenerator, ServiceRequest, SourceTreeResolver, SystemRunner};
use tracing::info;

use super::UnwrapOrExit;
use crate::reports::{PreviewReport, Report, ServiceReport, TerminalOutput};

#[derive(Args)]
pub struct NewCommand {
    #[command(subcommand)]
    kind: NewKind,
}

#[derive(Subcommand)]
enum NewKind {
    /// Scaffold a service interface and its Go module
    Service(NewServiceCommand),
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        match &self.kind {
            NewKind::Service(cmd) => cmd.run(),
        }
    }
}

#[derive(Args)]
pub struct NewServiceCommand {
    /// Entity name, e.g. `Order` or `order_item`
    pub name: String,

    /// Project root the service is generated under
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to kitgen.toml (defaults to <output>/kitgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Module path for `go mod init` (last segment is snake_cased)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Replace an existing service file
    #[arg(short, long)]
    pub force: bool,

    /// Print the file instead of writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl NewServiceCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config();
        let request = ServiceRequest::new(&self.name).with_overwrite(self.overwrite());

        let fs = LocalFs::new(&self.output);
        let runner = SystemRunner::new();
        let resolver =
            SourceTreeResolver::new(&self.output).with_overrides(config.entities.clone());
        let generator = ServiceGenerator::new(&config, &fs, &runner, &resolver);

        let mut out = TerminalOutput::new();
        if self.dry_run {
            let preview = generator.preview(&request).unwrap_or_exit();
            PreviewReport(preview).render(&mut out);
            return Ok(());
        }

        info!(name = %self.name, root = %self.output.display(), "generating service");
        let report = generator.generate(&request).unwrap_or_exit();
        ServiceReport(report).render(&mut out);
        Ok(())
    }

    fn overwrite(&self) -> Overwrite {
        if self.force {
            Overwrite::Always
        } else {
            Overwrite::Never
        }
    }

    fn load_config(&self) -> Config {
        let config = match &self.config {
            Some(path) => Config::from_file(path),
            None => Config::discover(&self.output),
        }
        .unwrap_or_exit();

        match &self.module {
            Some(module) => {
                let config = config.with_module_name(module);
                config
                    .validate(&SourceContext::new(module.as_str(), "--module"))
                    .unwrap_or_exit();
                config
            }
            None => config,
        }
    }
}
