//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod list;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::config::{BuildConfig, Layout};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build compat projects
    Build(build::BuildArgs),

    /// List compat projects and where their artifacts go
    List {
        /// Output in JSON format for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(
        self,
        layout: &Layout,
        config: &BuildConfig,
        output: &OutputConfig,
    ) -> Result<()> {
        match self {
            Self::Build(args) => build::execute(layout, config, output, args).await,
            Self::List { json } => list::execute(layout, json),
        }
    }
}
