//! Output path resolution
//!
//! Decides where each project's artifact goes. Artifacts land in the default
//! output root unless the project's declared `OutputPath` points into a
//! `ModPatches` tree, in which case the part after the marker is re-rooted
//! beneath the patch staging root. Any other declared path is ignored here;
//! the helper is only told the file to produce.

use std::path::PathBuf;

use crate::config::defaults::{ARTIFACT_EXTENSION, RELOCATION_MARKER};
use crate::config::Layout;
use crate::core::catalog::ProjectEntry;
use crate::error::{CompatError, ProjectFileError};
use crate::infra::{filesystem, project_file};

/// Resolved artifact destination for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredOutput {
    /// Artifact directory, relative to the workspace root
    pub directory: PathBuf,
    /// Artifact file name without extension, always the project name
    pub file_stem: String,
}

impl ConfiguredOutput {
    /// Artifact path handed to the helper
    pub fn artifact_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{ARTIFACT_EXTENSION}", self.file_stem))
    }

    /// Whether the artifact was relocated away from `output_root`
    pub fn is_relocated(&self, layout: &Layout) -> bool {
        self.directory != layout.output_root
    }
}

/// Path segments after the last relocation marker
///
/// Separators are normalized to `/` and empty or `.` segments are dropped.
/// Returns `Ok(None)` when the marker is absent or nothing remains after it.
///
/// # Errors
///
/// A `..` segment after the marker would leave the staging root and is
/// rejected; the error carries the offending segment.
///
/// # Examples
/// ```
/// use compatbuild::core::resolver::relocation_segments;
///
/// let segments = relocation_segments(r"..\..\ModPatches\VFE\Assemblies\").unwrap();
/// assert_eq!(segments, Some(vec!["VFE".to_string(), "Assemblies".to_string()]));
/// assert_eq!(relocation_segments(r"bin\Release\"), Ok(None));
/// assert!(relocation_segments(r"ModPatches\Old\..\New").is_err());
/// ```
pub fn relocation_segments(output_path: &str) -> Result<Option<Vec<String>>, String> {
    let Some((_, tail)) = output_path.rsplit_once(RELOCATION_MARKER) else {
        return Ok(None);
    };
    let mut segments = Vec::new();
    for segment in tail.replace('\\', "/").split('/') {
        match segment {
            "" | "." => {}
            ".." => return Err(segment.to_string()),
            _ => segments.push(segment.to_string()),
        }
    }
    Ok((!segments.is_empty()).then_some(segments))
}

/// Resolves [`ConfiguredOutput`] values against a workspace layout
#[derive(Debug, Clone, Copy)]
pub struct OutputResolver<'a> {
    layout: &'a Layout,
}

impl<'a> OutputResolver<'a> {
    /// Create a resolver for `layout`
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Resolve the artifact destination for `entry`
    ///
    /// Reads the project descriptor; a missing or malformed descriptor is an
    /// error, as is a relocated output containing `..`. A relocated directory
    /// is created before returning.
    pub fn resolve(&self, entry: &ProjectEntry) -> Result<ConfiguredOutput, CompatError> {
        let descriptor = self
            .layout
            .absolute(&entry.descriptor_path(&self.layout.source_dir));
        let declared = project_file::read_output_path(&descriptor)?;

        let relocated = match declared.as_deref() {
            Some(output_path) => relocation_segments(output_path).map_err(|_| {
                ProjectFileError::UnsafeOutputPath {
                    path: descriptor.clone(),
                    output_path: output_path.to_string(),
                }
            })?,
            None => None,
        };
        let Some(segments) = relocated else {
            tracing::debug!(
                "{}: declared output {:?} not relocated",
                entry.name,
                declared
            );
            return Ok(self.default_output(entry));
        };

        let directory = segments
            .iter()
            .fold(self.layout.patch_root.clone(), |dir, segment| dir.join(segment));
        filesystem::create_dir_all(&self.layout.absolute(&directory))?;
        tracing::debug!("{}: relocated to {}", entry.name, directory.display());

        Ok(ConfiguredOutput {
            directory,
            file_stem: entry.name.clone(),
        })
    }

    fn default_output(&self, entry: &ProjectEntry) -> ConfiguredOutput {
        ConfiguredOutput {
            directory: self.layout.output_root.clone(),
            file_stem: entry.name.clone(),
        }
    }
}
