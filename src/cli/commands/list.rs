//! List command implementation
//!
//! Implements `compatbuild list` to show every compat project in the solution
//! together with the artifact path the helper would be told to produce.
//! Resolution runs exactly as it does for a build, so relocated staging
//! directories are created here too.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Layout;
use crate::core::catalog::ProjectCatalog;
use crate::core::resolver::OutputResolver;

/// One listed project
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListedProject {
    /// Project name
    pub name: String,
    /// Descriptor path, relative to the workspace root
    pub descriptor: PathBuf,
    /// Artifact path, relative to the workspace root
    pub artifact: PathBuf,
    /// Whether the artifact is staged under the patch root
    pub relocated: bool,
}

/// Resolve every compat project in the layout's solution
pub fn collect(layout: &Layout) -> Result<Vec<ListedProject>> {
    let solution = layout.solution_path();
    let catalog = ProjectCatalog::load(&solution)
        .with_context(|| format!("Failed to load solution {}", solution.display()))?;
    let resolver = OutputResolver::new(layout);

    catalog
        .entries()
        .map(|entry| -> Result<ListedProject> {
            let output = resolver
                .resolve(&entry)
                .with_context(|| format!("Failed to resolve output for {}", entry.name))?;
            Ok(ListedProject {
                descriptor: entry.descriptor_path(&layout.source_dir),
                artifact: output.artifact_path(),
                relocated: output.is_relocated(layout),
                name: entry.name,
            })
        })
        .collect()
}

/// Execute the list command
pub fn execute(layout: &Layout, json: bool) -> Result<()> {
    let projects = collect(layout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No compat projects found");
        return Ok(());
    }

    let width = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for project in &projects {
        println!(
            "{:<width$}  {} -> {}",
            project.name,
            project.descriptor.display(),
            project.artifact.display()
        );
    }

    Ok(())
}
