//! Project descriptor reading
//!
//! Reads the declared output path out of an MSBuild-style project file.

use std::path::Path;

use crate::config::defaults::OUTPUT_PATH_ELEMENT;
use crate::error::ProjectFileError;

/// Read the first `OutputPath` element's text from a project descriptor
///
/// Returns `Ok(None)` when the element is missing or has no text content.
/// A missing or malformed file is an error.
pub fn read_output_path(path: &Path) -> Result<Option<String>, ProjectFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProjectFileError::ReadFailed {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    element_text(&content, OUTPUT_PATH_ELEMENT).map_err(|error| ProjectFileError::ParseFailed {
        path: path.to_path_buf(),
        error,
    })
}

/// Text of the first element named `name`, in document order
///
/// Matches on local name so namespaced MSBuild documents work unchanged.
pub fn element_text(content: &str, name: &str) -> Result<Option<String>, String> {
    let doc = roxmltree::Document::parse(content).map_err(|e| e.to_string())?;
    let text = doc
        .descendants()
        .find(|node| node.has_tag_name(name))
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string);
    Ok(text)
}
