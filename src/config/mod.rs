//! Configuration and constants
//!
//! [`BuildConfig`] carries the options handed to every helper invocation and
//! [`Layout`] the directories the orchestrator reads from and writes to. Both
//! are resolved once at startup and passed by reference afterwards.

pub mod defaults;

use std::path::{Path, PathBuf};

/// Options forwarded verbatim to the build helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Interpreter or executable that runs the helper
    pub helper_program: String,
    /// Helper script passed as the first argument (empty to omit)
    pub helper_script: String,
    /// Path to the assembly publicizer
    pub publicizer: String,
    /// Library download flag
    pub download_libs: String,
    /// Trailing reference to the shared base artifact
    pub base_reference: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            helper_program: defaults::HELPER_PROGRAM.to_string(),
            helper_script: defaults::HELPER_SCRIPT.to_string(),
            publicizer: defaults::PUBLICIZER.to_string(),
            download_libs: defaults::DOWNLOAD_LIBS.to_string(),
            base_reference: defaults::BASE_REFERENCE.to_string(),
        }
    }
}

/// Workspace directory layout
///
/// `solution`, `source_dir`, `output_root` and `patch_root` are relative to
/// `root`. The helper runs with `root` as its working directory, so the
/// relative paths it receives resolve against the same tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Workspace root
    pub root: PathBuf,
    /// Solution descriptor
    pub solution: PathBuf,
    /// Directory project paths in the solution are relative to
    pub source_dir: PathBuf,
    /// Default artifact directory
    pub output_root: PathBuf,
    /// Staging root for relocated artifacts
    pub patch_root: PathBuf,
}

impl Layout {
    /// Default layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            solution: PathBuf::from(defaults::SOLUTION_PATH),
            source_dir: PathBuf::from(defaults::SOURCE_DIR),
            output_root: PathBuf::from(defaults::OUTPUT_ROOT),
            patch_root: PathBuf::from(defaults::PATCH_ROOT),
        }
    }

    /// Override the solution path
    #[must_use]
    pub fn with_solution(mut self, solution: impl Into<PathBuf>) -> Self {
        self.solution = solution.into();
        self
    }

    /// Override the source directory
    #[must_use]
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// Resolve a workspace-relative path against the root
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute path of the solution descriptor
    pub fn solution_path(&self) -> PathBuf {
        self.absolute(&self.solution)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}
