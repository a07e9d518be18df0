use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{GenError, Result};

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written
    Written,
    /// The file already held identical content and was not touched
    Unchanged,
    /// Check mode: the file matches the sources
    UpToDate,
}

/// Write the generated module to `path`, replacing any previous content.
///
/// A file that already holds exactly `contents` is left alone so its
/// modification time does not trigger needless rebuilds. Parent directories
/// are not created.
pub fn write_output(path: &Path, contents: &str) -> Result<WriteOutcome> {
    if read_existing(path)?.as_deref() == Some(contents) {
        debug!("{} is already up to date", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    fs::write(path, contents).map_err(|e| GenError::io("write", path, e))?;
    Ok(WriteOutcome::Written)
}

/// Verify that `path` holds exactly `contents` without writing anything.
///
/// # Errors
/// `Stale` when the file is missing or differs.
pub fn check_output(path: &Path, contents: &str) -> Result<WriteOutcome> {
    match read_existing(path)? {
        Some(existing) if existing == contents => Ok(WriteOutcome::UpToDate),
        _ => Err(GenError::Stale {
            path: path.to_path_buf(),
        }),
    }
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8(bytes).ok()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GenError::io("read", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation.rs");

        assert_eq!(write_output(&path, "fn a() {}\n").unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fn a() {}\n");
    }

    #[test]
    fn test_overwrite_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation.rs");
        fs::write(&path, "a much longer previous content\n").unwrap();

        assert_eq!(write_output(&path, "short\n").unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_identical_content_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation.rs");
        fs::write(&path, "same\n").unwrap();

        assert_eq!(write_output(&path, "same\n").unwrap(), WriteOutcome::Unchanged);
    }

    #[test]
    fn test_replaces_non_utf8_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation.rs");
        fs::write(&path, b"\xff\xfe").unwrap();

        assert_eq!(write_output(&path, "ok\n").unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
    }

    #[test]
    fn test_missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("translation.rs");

        match write_output(&path, "x") {
            Err(GenError::Io { op, .. }) => assert_eq!(op, "write"),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation.rs");

        assert!(matches!(
            check_output(&path, "x"),
            Err(GenError::Stale { .. })
        ));

        fs::write(&path, "x").unwrap();
        assert_eq!(check_output(&path, "x").unwrap(), WriteOutcome::UpToDate);
        assert!(matches!(
            check_output(&path, "y"),
            Err(GenError::Stale { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }
}
