//! Compatbuild - build orchestrator for compat projects
//!
//! Scans a solution descriptor for `<Name>Compat` projects, works out where
//! each project's artifact belongs, and runs an external build helper for each
//! one, either one at a time or all at once.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Catalog scanning, output resolution and orchestration
//! - [`infra`] - Infrastructure layer (filesystem, project files, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
