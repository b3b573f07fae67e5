//! Filesystem operations
//!
//! Handles directory creation for artifact staging.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
///
/// Succeeds when the directory already exists, including when another
/// resolver created it concurrently.
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_dir_all_existing_is_ok() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");

        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_dir_all_over_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();

        let result = create_dir_all(&file.join("child"));

        assert!(matches!(result, Err(FilesystemError::CreateDir { .. })));
    }
}
