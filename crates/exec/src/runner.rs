//! The `CommandRunner` seam and its process-backed implementation.

use std::process::Command;

use thiserror::Error;

/// Errors surfaced by command invocation.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The executable could not be found on the search path.
    #[error("command '{name}' not found on PATH")]
    NotFound { name: String },
    /// The process could not be spawned for another reason.
    #[error("failed to spawn '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of one external command invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands and reports exit code plus captured output.
///
/// The contract is deliberately narrow: "exit 0 means success" is the only
/// guarantee callers may rely on.
pub trait CommandRunner: Send + Sync {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, ExecError>;

    /// Like [`CommandRunner::run`] but with the working directory set.
    fn run_in(
        &self,
        dir: &std::path::Path,
        name: &str,
        args: &[&str],
    ) -> Result<CommandOutput, ExecError>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

fn capture(name: &str, mut command: Command) -> Result<CommandOutput, ExecError> {
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExecError::NotFound {
                name: name.to_string(),
            }
        } else {
            ExecError::Spawn {
                name: name.to_string(),
                source: e,
            }
        }
    })?;
    Ok(CommandOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

impl CommandRunner for SystemRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        tracing::debug!(command = name, ?args, "invoking external command");
        let mut command = Command::new(name);
        command.args(args);
        capture(name, command)
    }

    fn run_in(
        &self,
        dir: &std::path::Path,
        name: &str,
        args: &[&str],
    ) -> Result<CommandOutput, ExecError> {
        tracing::debug!(command = name, ?args, dir = %dir.display(), "invoking external command");
        let mut command = Command::new(name);
        command.args(args).current_dir(dir);
        capture(name, command)
    }
}
