//! Compatbuild CLI
//!
//! Entry point for the compatbuild command-line application.

use clap::Parser;

use compatbuild::cli::output::{display_error, exit_code_for, OutputConfig};
use compatbuild::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.verbose);

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_level().into()),
        )
        .init();

    // Run the command and handle errors
    if let Err(e) = cli.run(&output_config).await {
        display_error(&e);
        std::process::exit(exit_code_for(&e));
    }
}
