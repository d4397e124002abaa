//! External command execution
//!
//! Commands run through the platform shell, block until the child exits, and
//! share the parent's console. A non-zero exit aborts the action.

use crate::error::ActionError;
use crate::projection::EnvProjection;
use serde::Serialize;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// One shell command line plus the context it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellCommand {
    pub line: String,
    pub cwd: PathBuf,
    /// Variables layered over the inherited environment.
    #[serde(skip)]
    pub env: EnvProjection,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>, cwd: impl Into<PathBuf>, env: EnvProjection) -> Self {
        Self {
            line: line.into(),
            cwd: cwd.into(),
            env,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(&self, command: &ShellCommand) -> Result<(), ActionError>;
}

/// Spawns commands for real, streaming their output to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &ShellCommand) -> Result<(), ActionError> {
        debug!(
            command = %command.line,
            cwd = %command.cwd.display(),
            env = ?command.env.names().collect::<Vec<_>>(),
            "Spawning command"
        );

        let status = Self::shell(&command.line)
            .current_dir(&command.cwd)
            .envs(command.env.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ActionError::Spawn {
                command: command.line.clone(),
                source,
            })?;

        if status.success() {
            debug!(command = %command.line, "Command finished");
            Ok(())
        } else {
            Err(ActionError::ExternalCommand {
                command: command.line.clone(),
                code: status.code(),
            })
        }
    }
}

/// Logs commands instead of running them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &ShellCommand) -> Result<(), ActionError> {
        info!(
            cwd = %command.cwd.display(),
            env = ?command.env.names().collect::<Vec<_>>(),
            "[dry-run] {}",
            command.line
        );
        Ok(())
    }
}
