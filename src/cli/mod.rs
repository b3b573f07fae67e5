//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no orchestration logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser};

use crate::config::{defaults, BuildConfig, Layout};
use commands::Commands;
use output::OutputConfig;

/// Compatbuild - build orchestrator for compat projects
///
/// Finds `<Name>Compat` projects in a solution and runs the build helper for each.
#[derive(Parser, Debug)]
#[command(name = "compatbuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Workspace layout and helper options
#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    /// Workspace root (defaults to the current directory)
    #[arg(short = 'C', long = "directory", global = true, default_value = ".")]
    pub root: PathBuf,

    /// Solution descriptor, relative to the workspace root
    #[arg(long, global = true, default_value = defaults::SOLUTION_PATH)]
    pub solution: PathBuf,

    /// Directory project paths in the solution are relative to
    #[arg(long, global = true, default_value = defaults::SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Assembly publicizer passed to the helper
    #[arg(long, global = true, env = defaults::ENV_PUBLICIZER, default_value = defaults::PUBLICIZER)]
    pub publicizer: String,

    /// Library download flag passed to the helper
    #[arg(
        long,
        global = true,
        env = defaults::ENV_DOWNLOAD_LIBS,
        default_value = defaults::DOWNLOAD_LIBS,
        allow_hyphen_values = true
    )]
    pub download_libs: String,

    /// Program that runs the build helper
    #[arg(long, global = true, default_value = defaults::HELPER_PROGRAM)]
    pub helper_program: String,

    /// Build helper script (empty to run the program directly)
    #[arg(long, global = true, default_value = defaults::HELPER_SCRIPT)]
    pub helper_script: String,
}

impl WorkspaceArgs {
    /// Directory layout
    pub fn layout(&self) -> Layout {
        Layout::new(&self.root)
            .with_solution(&self.solution)
            .with_source_dir(&self.source_dir)
    }

    /// Helper options
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            helper_program: self.helper_program.clone(),
            helper_script: self.helper_script.clone(),
            publicizer: self.publicizer.clone(),
            download_libs: self.download_libs.clone(),
            ..BuildConfig::default()
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self, output: &OutputConfig) -> Result<()> {
        if let Some(cmd) = self.command {
            let layout = self.workspace.layout();
            let config = self.workspace.build_config();
            tracing::debug!("Layout: {layout:?}");
            tracing::debug!("Build config: {config:?}");
            cmd.run(&layout, &config, output).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from(["compatbuild", "build", "-m", "-j", "FooCompat"]).unwrap();
        match cli.command {
            Some(Commands::Build(args)) => {
                assert!(args.selective);
                assert!(args.parallel);
                assert_eq!(args.targets, vec!["FooCompat"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_workspace_overrides() {
        let cli = Cli::try_parse_from([
            "compatbuild",
            "-C",
            "/work",
            "list",
            "--publicizer",
            "/opt/pub",
            "--download-libs",
            "--no-download",
        ])
        .unwrap();

        let layout = cli.workspace.layout();
        let config = cli.workspace.build_config();
        assert_eq!(layout.root, PathBuf::from("/work"));
        assert_eq!(config.publicizer, "/opt/pub");
        assert_eq!(config.download_libs, "--no-download");
    }
}
