//! Build command implementation
//!
//! Implements `compatbuild build` to run the helper for every selected compat
//! project.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{status, OutputConfig};
use crate::config::{BuildConfig, Layout};
use crate::core::catalog::{ProjectCatalog, ProjectEntry};
use crate::core::invoker::{DryRunLauncher, Launcher};
use crate::core::orchestrator::{ExecutionMode, Orchestrator, RunSummary, Selection};
use crate::infra::process::ProcessLauncher;

/// Build options
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Build only the projects named in TARGETS
    #[arg(short = 'm', long)]
    pub selective: bool,

    /// Launch every build at once, then wait for all of them
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Print helper command lines instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Project names to build with --selective
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<String>,
}

impl BuildArgs {
    /// Project selection
    pub fn selection(&self) -> Selection {
        if self.selective {
            Selection::only(self.targets.iter().cloned())
        } else {
            if !self.targets.is_empty() {
                tracing::warn!(
                    "Ignoring targets {:?} without --selective; building all projects",
                    self.targets
                );
            }
            Selection::All
        }
    }

    /// Execution mode
    pub fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

/// Execute the build command
pub async fn execute(
    layout: &Layout,
    config: &BuildConfig,
    output: &OutputConfig,
    args: BuildArgs,
) -> Result<()> {
    let solution = layout.solution_path();
    let catalog = ProjectCatalog::load(&solution)
        .with_context(|| format!("Failed to load solution {}", solution.display()))?;

    let selection = args.selection();
    let mode = args.mode();
    tracing::info!("Building from {} ({mode:?})", solution.display());

    let progress = |entry: &ProjectEntry| {
        output.status(status::PROGRESS, &format!("Building {}", entry.name));
    };

    let summary = if args.dry_run {
        let mut orchestrator =
            Orchestrator::new(layout, config, DryRunLauncher::default()).with_progress(progress);
        let summary = run(&mut orchestrator, &catalog, &selection, mode).await?;
        for invocation in &orchestrator.into_launcher().invocations {
            println!("{}", invocation.command_line());
        }
        summary
    } else {
        let launcher = ProcessLauncher::new(&layout.root);
        let mut orchestrator = Orchestrator::new(layout, config, launcher).with_progress(progress);
        run(&mut orchestrator, &catalog, &selection, mode).await?
    };

    if summary.dispatched.is_empty() {
        output.status(status::WARNING, "No compat projects to build");
    } else {
        output.status(
            status::SUCCESS,
            &format!("Dispatched {} project(s)", summary.dispatched.len()),
        );
    }

    Ok(())
}

async fn run<L: Launcher>(
    orchestrator: &mut Orchestrator<'_, L>,
    catalog: &ProjectCatalog,
    selection: &Selection,
    mode: ExecutionMode,
) -> Result<RunSummary> {
    orchestrator
        .run(catalog, selection, mode)
        .await
        .context("Build run failed")
}
