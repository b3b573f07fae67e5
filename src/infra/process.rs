//! External build helper processes
//!
//! Spawns the helper with `tokio::process` and hands back the child so the
//! orchestrator decides when to wait on it.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};

use crate::core::invoker::{BuildInvocation, BuildTask, Launcher};
use crate::error::BuildError;

/// Exit code reported for a helper that ended without one and no signal
pub const UNKNOWN_EXIT_CODE: i32 = 1;

/// Offset added to the signal number of a helper killed by a signal
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Exit code for a finished helper
///
/// A helper killed by a signal reports `128 + signal`, as a shell would.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }
    UNKNOWN_EXIT_CODE
}

/// Launches helpers as child processes of this one
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    working_dir: PathBuf,
}

impl ProcessLauncher {
    /// Launch helpers with `working_dir` as their current directory
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl Launcher for ProcessLauncher {
    type Task = ProcessTask;

    fn launch(&mut self, invocation: &BuildInvocation) -> Result<Self::Task, BuildError> {
        tracing::debug!("Spawning: {}", invocation.command_line());

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| BuildError::SpawnFailed {
                project: invocation.project.clone(),
                error: e.to_string(),
            })?;

        Ok(ProcessTask {
            project: invocation.project.clone(),
            child,
        })
    }
}

/// A running helper process
#[derive(Debug)]
pub struct ProcessTask {
    project: String,
    child: Child,
}

impl BuildTask for ProcessTask {
    async fn wait(&mut self) -> Result<i32, BuildError> {
        let status = self.child.wait().await.map_err(|e| BuildError::WaitFailed {
            project: self.project.clone(),
            error: e.to_string(),
        })?;
        Ok(exit_code(status))
    }
}
