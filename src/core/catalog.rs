//! Solution catalog scanning
//!
//! Extracts `<Name>Compat` project references from a solution descriptor.
//! Each line is matched on its own against a single anchored pattern of the
//! form `Project("<guid>") = "<name>", "<path>", "<guid>"`; anything else is
//! skipped without error.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::CatalogError;

/// GUID-shaped token, delimiters included. Shape only, no checksum.
const GUID: &str =
    r".[0-9A-Za-z]{8}-[0-9A-Za-z]{4}-[0-9A-Za-z]{4}-[0-9A-Za-z]{4}-[0-9A-Za-z]{12}.";

/// Project-reference line pattern. Captures the name and descriptor path.
fn project_pattern() -> String {
    format!(
        r#"^Project\("{GUID}"\) = "([0-9A-Za-z]+Compat)", "([0-9A-Za-z_.\\/-]+\.csproj)", "{GUID}""#
    )
}

/// A compat project referenced by the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Project name, always ending in `Compat`
    pub name: String,
    /// Descriptor path relative to the source directory, using `/` separators
    pub relative_path: String,
}

impl ProjectEntry {
    /// Descriptor path beneath `source_dir`
    pub fn descriptor_path(&self, source_dir: &Path) -> PathBuf {
        self.relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(source_dir.to_path_buf(), |path, segment| path.join(segment))
    }
}

/// Scanned solution text
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    text: String,
    pattern: Regex,
}

impl ProjectCatalog {
    /// Build a catalog over solution text
    pub fn from_text(text: impl Into<String>) -> Result<Self, CatalogError> {
        let pattern = Regex::new(&project_pattern())
            .map_err(|e| CatalogError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            text: text.into(),
            pattern,
        })
    }

    /// Read a solution descriptor from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_text(text)
    }

    /// Compat projects in solution order
    ///
    /// Lazy and restartable: calling this again yields the same entries.
    pub fn entries(&self) -> impl Iterator<Item = ProjectEntry> + '_ {
        self.text.lines().filter_map(|line| self.match_line(line))
    }

    fn match_line(&self, line: &str) -> Option<ProjectEntry> {
        let caps = self.pattern.captures(line.trim())?;
        Some(ProjectEntry {
            name: caps[1].to_string(),
            relative_path: caps[2].replace('\\', "/"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "CombatExtended", "CombatExtended\CombatExtended.csproj", "{3B5A4A6A-1E8C-4C1A-9E4B-1C7A5B5B9A11}"
EndProject
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "VFECompat", "Compatibility\VFE\VFECompat.csproj", "{0D6C6F4E-23A1-4C55-9F2D-7F0B3E2A1B01}"
EndProject
	Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "SOS2Compat", "Compatibility/SOS2/SOS2Compat.csproj", "{9C2A6D1B-6B3E-4E2C-8C55-41A1F3E2D402}"
EndProject
Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "Compat Tools", "Compat Tools", "{5D1A0B7F-1C4B-4E0A-93C1-2E2A8F7B3C03}"
Global
EndGlobal
"#;

    #[test]
    fn test_entries_only_compat_projects_in_order() {
        let catalog = ProjectCatalog::from_text(SOLUTION).unwrap();
        let names: Vec<String> = catalog.entries().map(|e| e.name).collect();
        assert_eq!(names, vec!["VFECompat", "SOS2Compat"]);
    }

    #[test]
    fn test_entries_normalize_backslashes() {
        let catalog = ProjectCatalog::from_text(SOLUTION).unwrap();
        let first = catalog.entries().next().unwrap();
        assert_eq!(first.relative_path, "Compatibility/VFE/VFECompat.csproj");
    }

    #[test]
    fn test_entries_restartable() {
        let catalog = ProjectCatalog::from_text(SOLUTION).unwrap();
        let first: Vec<ProjectEntry> = catalog.entries().collect();
        let second: Vec<ProjectEntry> = catalog.entries().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let catalog = ProjectCatalog::from_text("Global\nEndGlobal\n").unwrap();
        assert_eq!(catalog.entries().count(), 0);
    }

    #[test]
    fn test_non_compat_suffix_rejected() {
        let line = r#"Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Compatibility", "Compatibility.csproj", "{0D6C6F4E-23A1-4C55-9F2D-7F0B3E2A1B01}""#;
        let catalog = ProjectCatalog::from_text(line).unwrap();
        assert_eq!(catalog.entries().count(), 0);
    }

    #[test]
    fn test_non_csproj_path_rejected() {
        let line = r#"Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "FooCompat", "Foo\FooCompat.vbproj", "{0D6C6F4E-23A1-4C55-9F2D-7F0B3E2A1B01}""#;
        let catalog = ProjectCatalog::from_text(line).unwrap();
        assert_eq!(catalog.entries().count(), 0);
    }

    #[test]
    fn test_guid_shape_only() {
        // Lowercase and non-hex letters still match the shape
        let line = r#"Project("{zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz}") = "FooCompat", "Foo/FooCompat.csproj", "{aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee}""#;
        let catalog = ProjectCatalog::from_text(line).unwrap();
        assert_eq!(catalog.entries().count(), 1);
    }

    #[test]
    fn test_descriptor_path_beneath_source_dir() {
        let entry = ProjectEntry {
            name: "FooCompat".to_string(),
            relative_path: "Compat/Foo/FooCompat.csproj".to_string(),
        };
        assert_eq!(
            entry.descriptor_path(Path::new("Source")),
            Path::new("Source").join("Compat").join("Foo").join("FooCompat.csproj")
        );
    }

    #[test]
    fn test_load_missing_solution() {
        let result = ProjectCatalog::load(Path::new("/nonexistent/Missing.sln"));
        assert!(matches!(result, Err(CatalogError::ReadFailed { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_matching_line_yields_one_entry(
            stem in "[A-Za-z0-9]{1,16}",
            dirs in proptest::collection::vec("[A-Za-z0-9_]{1,8}", 0..4),
        ) {
            let name = format!("{stem}Compat");
            let mut segments = dirs.clone();
            segments.push(format!("{name}.csproj"));
            let line = format!(
                r#"Project("{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}") = "{name}", "{}", "{{0D6C6F4E-23A1-4C55-9F2D-7F0B3E2A1B01}}""#,
                segments.join("\\")
            );
            let catalog = ProjectCatalog::from_text(format!("Global\n{line}\nEndGlobal\n")).unwrap();
            let entries: Vec<ProjectEntry> = catalog.entries().collect();
            prop_assert_eq!(entries.len(), 1);
            prop_assert_eq!(&entries[0].name, &name);
            prop_assert_eq!(&entries[0].relative_path, &segments.join("/"));
        }

        #[test]
        fn prop_lines_without_project_prefix_yield_nothing(text in "[^P\n]{0,80}") {
            let catalog = ProjectCatalog::from_text(text).unwrap();
            prop_assert_eq!(catalog.entries().count(), 0);
        }
    }
}
