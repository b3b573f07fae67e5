//! Infrastructure layer
//!
//! Handles I/O: project files, directories, and external processes.

pub mod filesystem;
pub mod process;
pub mod project_file;
