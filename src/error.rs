//! Error types for compatbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Solution catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Solution file could not be read
    #[error("Failed to read solution '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Project reference pattern failed to compile
    #[error("Invalid project pattern: {0}")]
    InvalidPattern(String),
}

/// Project descriptor errors
#[derive(Error, Debug)]
pub enum ProjectFileError {
    /// Project descriptor could not be read
    #[error("Failed to read project file '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Project descriptor is not well-formed XML
    #[error("Failed to parse project file '{path}': {error}")]
    ParseFailed { path: PathBuf, error: String },

    /// Declared output climbs out of the staging root with `..`
    #[error("Output path '{output_path}' in '{path}' escapes the staging root")]
    UnsafeOutputPath { path: PathBuf, output_path: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },
}

/// Build helper errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Helper process could not be started
    #[error("Failed to launch build helper for '{project}': {error}")]
    SpawnFailed { project: String, error: String },

    /// Waiting on the helper process failed
    #[error("Failed to wait for build helper of '{project}': {error}")]
    WaitFailed { project: String, error: String },

    /// Helper exited with a non-zero code
    #[error("Build failed for '{project}' with exit code {code}")]
    Failed { project: String, code: i32 },
}

impl BuildError {
    /// Exit code the orchestrator should terminate with, if this is a helper failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Top-level compatbuild error type
#[derive(Error, Debug)]
pub enum CompatError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Project file error
    #[error("Project file error: {0}")]
    ProjectFile(#[from] ProjectFileError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}

impl CompatError {
    /// Exit code of a failed helper, when the error came from one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Build(e) => e.exit_code(),
            _ => None,
        }
    }
}
