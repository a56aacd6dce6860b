//! Error types for capitol-runner.

use std::process::ExitStatus;

use thiserror::Error;

/// Failures while invoking collaborator processes.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The process could not be spawned at all.
    #[error("failed to spawn {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited non-zero (or died to a signal).
    #[error("command failed ({status}): {command}")]
    CommandFailed { command: String, status: ExitStatus },
}

impl RunnerError {
    /// The numeric exit code, when the process exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunnerError::Io { .. } => None,
            RunnerError::CommandFailed { status, .. } => status.code(),
        }
    }
}
