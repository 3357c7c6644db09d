//! Go module initialization.
//!
//! A service directory becomes a Go module by running `go mod init` inside
//! it. The command goes through the host shell via a [`CommandRunner`], so
//! tests can substitute a fake and count invocations.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    process::Command,
};

use kitgen_config::Config;
use kitgen_core::{Filesystem, to_snake_case};
use tracing::debug;

use crate::{Error, Result};

/// Module descriptor file name.
pub const GO_MOD: &str = "go.mod";

/// The shell a command line is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    pub program: &'static str,
    pub flag: &'static str,
}

impl Shell {
    /// `cmd /C`.
    pub const CMD: Self = Self {
        program: "cmd",
        flag: "/C",
    };

    /// `sh -c`.
    pub const SH: Self = Self {
        program: "sh",
        flag: "-c",
    };

    /// The shell of the host platform.
    pub fn host() -> Self {
        if cfg!(windows) { Self::CMD } else { Self::SH }
    }

    /// Quote `arg` for this shell when it contains anything but plain
    /// path characters.
    ///
    /// `cmd` expands `%VAR%` even inside double quotes, so each `%` is
    /// moved outside the quotes and caret-escaped.
    pub fn quote(&self, arg: &str) -> String {
        let plain = !arg.is_empty()
            && arg
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "_-./:@+=,~".contains(c));
        if plain {
            return arg.to_string();
        }
        if *self == Self::CMD {
            let escaped = arg.replace('"', "\"\"").replace('%', "\"^%\"");
            format!("\"{}\"", escaped)
        } else {
            format!("'{}'", arg.replace('\'', "'\\''"))
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.flag)
    }
}

/// A command line to run through a shell in a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub shell: Shell,
    pub line: String,
    pub dir: PathBuf,
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status.
    pub fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs shell commands and waits for them to finish.
pub trait CommandRunner {
    fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
        let output = Command::new(command.shell.program)
            .arg(command.shell.flag)
            .arg(&command.line)
            .current_dir(&command.dir)
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Outcome of [`ModuleInitializer::ensure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    /// `go.mod` was already present; nothing ran.
    Existing,
    /// `go mod init` ran with this module path.
    Created { module: String },
}

/// Module path for a service.
///
/// Without an override this is the snake_cased service name. With one,
/// only the final `/` segment is snake_cased.
pub fn module_name(config: &Config, snake_name: &str) -> String {
    match config.module_name.as_deref() {
        Some(module) if !module.trim().is_empty() => match module.rsplit_once('/') {
            Some((prefix, last)) => format!("{}/{}", prefix, to_snake_case(last)),
            None => to_snake_case(module),
        },
        _ => snake_name.to_string(),
    }
}

/// Makes sure a directory holds a `go.mod`.
pub struct ModuleInitializer<'a> {
    config: &'a Config,
    fs: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
    shell: Shell,
}

impl<'a> ModuleInitializer<'a> {
    pub fn new(config: &'a Config, fs: &'a dyn Filesystem, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            fs,
            runner,
            shell: Shell::host(),
        }
    }

    /// Use a specific shell instead of the host's.
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Run `go mod init` in `target_dir` unless `go.mod` already exists.
    pub fn ensure(&self, target_dir: &Path, snake_name: &str) -> Result<ModuleStatus> {
        if self.fs.exists(&target_dir.join(GO_MOD)) {
            debug!(dir = %target_dir.display(), "go.mod present, skipping module init");
            return Ok(ModuleStatus::Existing);
        }

        let module = module_name(self.config, snake_name);
        let line = format!(
            "{} mod init {}",
            self.shell.quote(&self.config.go_binary),
            self.shell.quote(&module)
        );
        let command = ShellCommand {
            shell: self.shell,
            line,
            dir: self.fs.host_path(target_dir),
        };
        debug!(
            shell = %command.shell,
            line = %command.line,
            dir = %command.dir.display(),
            "running module init"
        );

        let output = self.runner.run(&command).map_err(|e| Error::Io {
            action: "run module init in",
            path: command.dir.clone(),
            source: e,
        })?;

        if !output.success() {
            return Err(Error::ModuleInit {
                shell: command.shell.to_string(),
                command: command.line,
                dir: command.dir,
                status: output.status(),
                stderr: output.stderr.trim_end().to_string(),
            });
        }

        Ok(ModuleStatus::Created { module })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use kitgen_core::testing::MemoryFs;

    use super::*;

    struct Recorder {
        calls: RefCell<Vec<ShellCommand>>,
        output: CommandOutput,
    }

    impl Recorder {
        fn exiting(code: i32, stderr: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                output: CommandOutput {
                    code: Some(code),
                    stdout: String::new(),
                    stderr: stderr.to_string(),
                },
            }
        }
    }

    impl CommandRunner for Recorder {
        fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
            self.calls.borrow_mut().push(command.clone());
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_module_name_override() {
        let config = Config::default();
        assert_eq!(module_name(&config, "order"), "order");

        let config = Config::default().with_module_name("github.com/AcmeCo/OrderSvc");
        assert_eq!(module_name(&config, "order"), "github.com/AcmeCo/order_svc");

        let config = Config::default().with_module_name("OrderSvc");
        assert_eq!(module_name(&config, "order"), "order_svc");
    }

    #[test]
    fn test_existing_marker_skips_runner() {
        let config = Config::default();
        let fs = MemoryFs::new().with_file("order/pkg/service/go.mod", "module order\n");
        let runner = Recorder::exiting(0, "");

        let status = ModuleInitializer::new(&config, &fs, &runner)
            .ensure(Path::new("order/pkg/service"), "order")
            .unwrap();

        assert_eq!(status, ModuleStatus::Existing);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_runs_go_mod_init_in_target_dir() {
        let config = Config::default();
        let fs = MemoryFs::new();
        let runner = Recorder::exiting(0, "");

        let status = ModuleInitializer::new(&config, &fs, &runner)
            .with_shell(Shell::SH)
            .ensure(Path::new("order/pkg/service"), "order")
            .unwrap();

        assert_eq!(
            status,
            ModuleStatus::Created {
                module: "order".to_string()
            }
        );
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].line, "go mod init order");
        assert_eq!(calls[0].dir, PathBuf::from("order/pkg/service"));
        assert_eq!(calls[0].shell, Shell::SH);
    }

    #[test]
    fn test_failure_carries_command_and_stderr() {
        let config = Config::default();
        let fs = MemoryFs::new();
        let runner = Recorder::exiting(1, "go: module already exists\n");

        let err = ModuleInitializer::new(&config, &fs, &runner)
            .with_shell(Shell::SH)
            .ensure(Path::new("order/pkg/service"), "order")
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("sh -c go mod init order"), "{msg}");
        assert!(msg.contains("go: module already exists"), "{msg}");
        assert!(msg.contains("exit status 1"), "{msg}");
    }

    #[test]
    fn test_quote() {
        assert_eq!(Shell::SH.quote("go"), "go");
        assert_eq!(Shell::SH.quote("github.com/acme/order"), "github.com/acme/order");
        assert_eq!(Shell::SH.quote("/opt/my go/bin/go"), "'/opt/my go/bin/go'");
        assert_eq!(Shell::SH.quote("it's"), "'it'\\''s'");
        assert_eq!(
            Shell::CMD.quote("C:\\Program Files\\Go\\bin\\go.exe"),
            "\"C:\\Program Files\\Go\\bin\\go.exe\""
        );
        assert_eq!(Shell::SH.quote("%GOROOT%/bin/go"), "'%GOROOT%/bin/go'");
        assert_eq!(
            Shell::CMD.quote("%GOROOT%\\bin\\go.exe"),
            "\"\"^%\"GOROOT\"^%\"\\bin\\go.exe\""
        );
        assert_eq!(Shell::CMD.quote("example.com/100%"), "\"example.com/100\"^%\"\"");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_streams() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = SystemRunner::new()
            .run(&ShellCommand {
                shell: Shell::SH,
                line: "echo out; echo err 1>&2; exit 3".to_string(),
                dir: temp.path().to_path_buf(),
            })
            .unwrap();

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }
}
