//! Core orchestration logic
//!
//! # Submodules
//!
//! - [`catalog`] - Compat project discovery in the solution descriptor
//! - [`resolver`] - Artifact destination and patch relocation
//! - [`invoker`] - Build helper command lines and the launcher seam
//! - [`orchestrator`] - Sequential and parallel execution

pub mod catalog;
pub mod invoker;
pub mod orchestrator;
pub mod resolver;
