//! Output formatting
//!
//! User-facing status lines, log level selection, and error display.

use tracing::Level;

use crate::error::{BuildError, CompatError};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Progress prefix
    pub const PROGRESS: &str = "→";
}

/// Output preferences resolved from global flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress status lines
    pub quiet: bool,
    /// Verbosity count (`-v`, `-vv`)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output preferences
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Log level for the tracing subscriber
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Print a status line unless quiet
    pub fn status(&self, prefix: &str, message: &str) {
        if !self.quiet {
            println!("{prefix} {message}");
        }
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

/// Process exit code for a fatal error
///
/// A failed helper's own exit code is passed through; everything else is 1.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<CompatError>()
                .and_then(CompatError::exit_code)
                .or_else(|| cause.downcast_ref::<BuildError>().and_then(BuildError::exit_code))
        })
        .unwrap_or(1)
}
