use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::IconError;
use crate::logger::{log_command, log_line};

pub const DEFAULT_PACKAGER: &str = "iconutil";

/// Captured result of an external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs commands on the host via `std::process::Command`, blocking until exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        log_command(program, args);
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Compiles an `.iconset` directory into an `.icns` container.
#[derive(Debug, Clone)]
pub struct Packager {
    pub program: String,
}

impl Default for Packager {
    fn default() -> Self {
        Self { program: DEFAULT_PACKAGER.to_string() }
    }
}

impl Packager {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn args(iconset: &Path, output: &Path) -> Vec<String> {
        vec![
            "-c".to_string(),
            "icns".to_string(),
            iconset.to_string_lossy().into_owned(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
        ]
    }

    pub fn package(
        &self,
        runner: &dyn CommandRunner,
        iconset: &Path,
        output: &Path,
    ) -> Result<(), IconError> {
        let args = Self::args(iconset, output);
        let result = runner
            .run(&self.program, &args)
            .map_err(|source| IconError::Spawn { program: self.program.clone(), source })?;

        if !result.success() {
            return Err(IconError::Packaging {
                program: self.program.clone(),
                code: result.code,
                stderr: result.stderr.trim().to_string(),
            });
        }
        if !output.exists() {
            return Err(IconError::MissingOutput {
                program: self.program.clone(),
                path: output.to_path_buf(),
            });
        }
        log_line(&format!("{} packaged {}", self.program, output.display()));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    /// What the fake saw when it was invoked.
    #[derive(Debug, Clone)]
    pub struct Invocation {
        pub program: String,
        pub args: Vec<String>,
        pub iconset_files: usize,
    }

    /// Stand-in for `iconutil` returning a fixed status.
    pub struct FakeRunner {
        pub code: Option<i32>,
        pub stderr: String,
        pub write_output: bool,
        pub spawn_error: bool,
        pub calls: RefCell<Vec<Invocation>>,
    }

    impl FakeRunner {
        pub fn succeeding() -> Self {
            Self {
                code: Some(0),
                stderr: String::new(),
                write_output: true,
                spawn_error: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(code: i32, stderr: &str) -> Self {
            Self {
                code: Some(code),
                stderr: stderr.to_string(),
                write_output: false,
                ..Self::succeeding()
            }
        }

        pub fn last_iconset(&self) -> Option<PathBuf> {
            self.calls.borrow().last().map(|c| PathBuf::from(&c.args[2]))
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
            if self.spawn_error {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
            }
            let iconset_files = fs::read_dir(&args[2]).map(|d| d.count()).unwrap_or(0);
            self.calls.borrow_mut().push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
                iconset_files,
            });
            if self.write_output {
                fs::write(&args[4], b"icns")?;
            }
            Ok(CommandOutput {
                code: self.code,
                stdout: String::new(),
                stderr: self.stderr.clone(),
            })
        }
    }
}
