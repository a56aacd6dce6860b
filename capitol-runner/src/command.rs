//! Process invocation for external collaborators.
//!
//! Every scraper, loader, converter, and analysis script is a black box
//! behind a [`CommandSpec`]: a program, its arguments, and an optional
//! working directory. Exit status is always captured and a non-zero exit is
//! an error — collaborator failures must surface, not scroll past.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::RunnerError;

/// One collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// A direct program invocation.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// A `sh -c` invocation, for collaborator scripts that need `cd` and
    /// virtualenv activation baked into one line.
    pub fn shell(script: impl Into<String>) -> Self {
        Self::new("sh").arg("-c").arg(script)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The full command line, for logs and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run to completion with inherited stdio — scrapers stream their own
    /// progress. Non-zero exit is [`RunnerError::CommandFailed`].
    pub fn run(&self) -> Result<(), RunnerError> {
        tracing::info!("running: {self}");
        let status = self
            .build()
            .status()
            .map_err(|e| self.spawn_err(e))?;
        if !status.success() {
            return Err(RunnerError::CommandFailed {
                command: self.command_line(),
                status,
            });
        }
        tracing::debug!("finished: {self}");
        Ok(())
    }

    /// Run to completion capturing stdout, for the few callers that consume
    /// collaborator output instead of streaming it.
    pub fn run_captured(&self) -> Result<String, RunnerError> {
        tracing::info!("running: {self}");
        let output = self.build().output().map_err(|e| self.spawn_err(e))?;
        if !output.status.success() {
            return Err(RunnerError::CommandFailed {
                command: self.command_line(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn build(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }

    fn spawn_err(&self, source: std::io::Error) -> RunnerError {
        RunnerError::Io {
            command: self.command_line(),
            source,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cwd {
            Some(cwd) => write!(f, "[{}] {}", cwd.display(), self.command_line()),
            None => f.write_str(&self.command_line()),
        }
    }
}

/// `cd {dir}; . .env/bin/activate; {command}` — the congress project and
/// its converters expect their own virtualenv.
pub fn in_venv(dir: &Path, command: &str) -> CommandSpec {
    CommandSpec::shell(format!(
        "cd {}; . .env/bin/activate; {}",
        dir.display(),
        command
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn successful_run_is_ok() {
        CommandSpec::new("true").run().expect("true exits zero");
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let err = CommandSpec::shell("exit 3").run().unwrap_err();
        assert!(matches!(err, RunnerError::CommandFailed { .. }));
        assert_eq!(err.exit_code(), Some(3));
    }

    #[test]
    fn missing_program_is_io() {
        let err = CommandSpec::new("no-such-program-here").run().unwrap_err();
        assert!(matches!(err, RunnerError::Io { .. }));
    }

    #[test]
    fn captured_output_is_returned() {
        let out = CommandSpec::shell("printf congress").run_captured().unwrap();
        assert_eq!(out, "congress");
    }

    #[test]
    fn captured_failure_still_errors() {
        let err = CommandSpec::shell("printf partial; exit 1")
            .run_captured()
            .unwrap_err();
        assert!(matches!(err, RunnerError::CommandFailed { .. }));
    }

    #[test]
    fn current_dir_applies() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("marker"), "").unwrap();
        let out = CommandSpec::new("ls")
            .current_dir(tmp.path())
            .run_captured()
            .unwrap();
        assert_eq!(out.trim(), "marker");
    }

    #[test]
    fn command_line_joins_program_and_args() {
        let spec = CommandSpec::new("perl")
            .arg("fetchbilltext.pl")
            .args(["FULLTEXT", "113"]);
        assert_eq!(spec.command_line(), "perl fetchbilltext.pl FULLTEXT 113");
    }

    #[test]
    fn venv_wrapper_builds_one_shell_line() {
        let spec = in_venv(Path::new("/srv/congress"), "./run deepbills --log=error");
        assert_eq!(
            spec.command_line(),
            "sh -c cd /srv/congress; . .env/bin/activate; ./run deepbills --log=error"
        );
    }
}
