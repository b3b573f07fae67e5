//! Build helper invocation
//!
//! Builds the helper command line for one project and defines the seam
//! between the orchestrator and whatever actually runs it: a [`Launcher`]
//! starts a build without waiting, and the returned [`BuildTask`] is awaited
//! later by the orchestrator.

use crate::config::{BuildConfig, Layout};
use crate::core::catalog::ProjectEntry;
use crate::core::resolver::ConfiguredOutput;
use crate::error::BuildError;

/// One helper command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
    /// Project being built
    pub project: String,
    /// Program to execute
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
}

impl BuildInvocation {
    /// Helper invocation for `entry`, writing to `output`
    ///
    /// Argument order: `[script] --csproj <path> --output <artifact>
    /// <download-libs> --all-libs --publicizer <path> -- <base reference>`.
    pub fn for_project(
        entry: &ProjectEntry,
        output: &ConfiguredOutput,
        layout: &Layout,
        config: &BuildConfig,
    ) -> Self {
        let mut args = Vec::with_capacity(11);
        if !config.helper_script.is_empty() {
            args.push(config.helper_script.clone());
        }
        args.extend([
            "--csproj".to_string(),
            entry.descriptor_path(&layout.source_dir).display().to_string(),
            "--output".to_string(),
            output.artifact_path().display().to_string(),
            config.download_libs.clone(),
            "--all-libs".to_string(),
            "--publicizer".to_string(),
            config.publicizer.clone(),
            "--".to_string(),
            config.base_reference.clone(),
        ]);

        Self {
            project: entry.name.clone(),
            program: config.helper_program.clone(),
            args,
        }
    }

    /// Shell-style rendering for display
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|arg| {
                if arg.is_empty() || arg.contains(char::is_whitespace) {
                    format!("'{arg}'")
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A launched build
#[allow(async_fn_in_trait)]
pub trait BuildTask {
    /// Wait for the build to finish and return its exit code
    async fn wait(&mut self) -> Result<i32, BuildError>;
}

/// Starts builds without waiting for them
pub trait Launcher {
    /// Handle to a launched build
    type Task: BuildTask;

    /// Start the build described by `invocation`
    fn launch(&mut self, invocation: &BuildInvocation) -> Result<Self::Task, BuildError>;
}

/// A build whose outcome is already known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTask(pub i32);

impl BuildTask for CompletedTask {
    async fn wait(&mut self) -> Result<i32, BuildError> {
        Ok(self.0)
    }
}

/// Records invocations instead of running them
#[derive(Debug, Default)]
pub struct DryRunLauncher {
    /// Invocations in launch order
    pub invocations: Vec<BuildInvocation>,
}

impl Launcher for DryRunLauncher {
    type Task = CompletedTask;

    fn launch(&mut self, invocation: &BuildInvocation) -> Result<Self::Task, BuildError> {
        self.invocations.push(invocation.clone());
        Ok(CompletedTask(0))
    }
}
