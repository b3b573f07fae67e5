//! Build orchestration logic
//!
//! Walks the catalog, resolves each selected project's output, and launches
//! its build.
//!
//! Sequential mode waits on every build as soon as it is launched and stops at
//! the first non-zero exit code, surfacing it as [`BuildError::Failed`].
//!
//! Parallel mode launches every build first and then waits on all of them in
//! launch order. Non-zero exit codes seen during that final join are logged
//! but do not fail the run, so a parallel run succeeds even when a helper
//! fails.

use std::collections::HashSet;

use crate::config::{BuildConfig, Layout};
use crate::core::catalog::{ProjectCatalog, ProjectEntry};
use crate::core::invoker::{BuildInvocation, BuildTask, Launcher};
use crate::core::resolver::OutputResolver;
use crate::error::{BuildError, CompatError};

/// How launched builds are awaited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One build at a time, stop on first failure
    #[default]
    Sequential,
    /// Launch everything, then wait on everything
    Parallel,
}

/// Which catalog entries to build
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every compat project
    #[default]
    All,
    /// Only the named projects
    Only(HashSet<String>),
}

impl Selection {
    /// Restrict to `names`
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    /// Whether `name` is selected
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(name),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Projects whose builds were launched, in launch order
    pub dispatched: Vec<String>,
    /// Projects left out by the selection
    pub skipped: Vec<String>,
}

/// Drives one orchestration run
pub struct Orchestrator<'a, L: Launcher> {
    layout: &'a Layout,
    config: &'a BuildConfig,
    launcher: L,
    progress: Box<dyn FnMut(&ProjectEntry) + 'a>,
}

impl<'a, L: Launcher> Orchestrator<'a, L> {
    /// Create an orchestrator that launches builds through `launcher`
    pub fn new(layout: &'a Layout, config: &'a BuildConfig, launcher: L) -> Self {
        Self {
            layout,
            config,
            launcher,
            progress: Box::new(|_| {}),
        }
    }

    /// Call `progress` for every project right before its build is launched
    #[must_use]
    pub fn with_progress(mut self, progress: impl FnMut(&ProjectEntry) + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Consume the orchestrator and return its launcher
    pub fn into_launcher(self) -> L {
        self.launcher
    }

    /// Build the selected projects of `catalog`
    ///
    /// Resolution and launch errors are fatal in both modes. In parallel mode
    /// builds already launched are still waited on before the error is
    /// returned, since running builds are never cancelled.
    pub async fn run(
        &mut self,
        catalog: &ProjectCatalog,
        selection: &Selection,
        mode: ExecutionMode,
    ) -> Result<RunSummary, CompatError> {
        let mut summary = RunSummary::default();
        let mut pending: Vec<(String, L::Task)> = Vec::new();

        for entry in catalog.entries() {
            if !selection.includes(&entry.name) {
                tracing::debug!("Skipping {} (not selected)", entry.name);
                summary.skipped.push(entry.name);
                continue;
            }

            let mut task = match self.dispatch(&entry) {
                Ok(task) => task,
                Err(e) => {
                    join_all(pending).await;
                    return Err(e);
                }
            };
            summary.dispatched.push(entry.name.clone());

            match mode {
                ExecutionMode::Sequential => {
                    let code = task.wait().await?;
                    if code != 0 {
                        return Err(BuildError::Failed {
                            project: entry.name,
                            code,
                        }
                        .into());
                    }
                    tracing::info!("Built {}", entry.name);
                }
                ExecutionMode::Parallel => pending.push((entry.name, task)),
            }
        }

        join_all(pending).await;
        Ok(summary)
    }

    fn dispatch(&mut self, entry: &ProjectEntry) -> Result<L::Task, CompatError> {
        let output = OutputResolver::new(self.layout).resolve(entry)?;
        (self.progress)(entry);
        tracing::info!("Building {}", entry.name);

        let invocation = BuildInvocation::for_project(entry, &output, self.layout, self.config);
        Ok(self.launcher.launch(&invocation)?)
    }
}

/// Wait on every pending build, in launch order, without failing
async fn join_all<T: BuildTask>(pending: Vec<(String, T)>) {
    for (name, mut task) in pending {
        match task.wait().await {
            Ok(0) => tracing::info!("Built {name}"),
            Ok(code) => tracing::warn!("Build of {name} exited with code {code}"),
            Err(e) => tracing::warn!("{e}"),
        }
    }
}
