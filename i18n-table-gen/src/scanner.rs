use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GenError, Result};

/// List the translation files in `dir`.
///
/// Every regular file is returned (symlinks are followed); subdirectories are
/// skipped. The result is sorted by file name so the generated table does not
/// depend on the platform's directory listing order.
///
/// # Errors
/// - The directory cannot be read
/// - A directory entry or its metadata cannot be read
pub fn scan_translation_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| GenError::io("read directory", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenError::io("read directory", dir, e))?;
        let path = entry.path();

        let metadata = fs::metadata(&path).map_err(|e| GenError::io("inspect", &path, e))?;
        if !metadata.is_file() {
            debug!("skipping non-file entry {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        warn!("no translation files found in directory {}", dir.display());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_sorts_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), "{}").unwrap();
        fs::write(dir.path().join("de.json"), "{}").unwrap();
        fs::write(dir.path().join("en-US.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("archive.json")).unwrap();

        let files = scan_translation_dir(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["de.json", "en-US.json", "fr.json"]);
    }

    #[test]
    fn test_scan_keeps_files_without_json_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = scan_translation_dir(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("notes.txt")]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_translation_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("i18n");

        match scan_translation_dir(&missing) {
            Err(GenError::Io { op, path, .. }) => {
                assert_eq!(op, "read directory");
                assert_eq!(path, missing);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
