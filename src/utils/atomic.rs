//! Atomic file operations
//!
//! The event document is always replaced as a whole:
//!
//! 1. Write to a sibling temporary file (.tmp)
//! 2. Call sync_all() to flush to disk
//! 3. Rename temp file to final path (atomic on most filesystems)
//!
//! Readers therefore see either the old document or the new one, and a
//! failed write leaves the previous document untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// Temporary sibling used while replacing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Atomically replace the content of `path`
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> StorageResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
    }

    let result = write_and_sync(&temp_path, content)
        .and_then(|_| fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync(temp_path: &Path, content: &str) -> StorageResult<()> {
    let mut file = File::create(temp_path).map_err(|e| StorageError::io(temp_path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| StorageError::io(temp_path, e))?;
    file.sync_all().map_err(|e| StorageError::io(temp_path, e))
}

/// Remove a temp file left behind by an interrupted write
///
/// Returns whether a stale file was found.
pub fn remove_stale_temp<P: AsRef<Path>>(path: P) -> StorageResult<bool> {
    let temp_path = temp_path_for(path.as_ref());
    if !temp_path.exists() {
        return Ok(false);
    }
    fs::remove_file(&temp_path).map_err(|e| StorageError::io(&temp_path, e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");

        atomic_write(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("nested").join("events.json");

        atomic_write(&path, "nested content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested content");
    }

    #[test]
    fn test_failed_write_keeps_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        atomic_write(&path, "original").unwrap();

        // A directory squatting on the temp path makes File::create fail
        fs::create_dir(temp_path_for(&path)).unwrap();
        assert!(atomic_write(&path, "replacement").is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_remove_stale_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(temp_path_for(&path), "partial").unwrap();

        assert!(remove_stale_temp(&path).unwrap());
        assert!(!temp_path_for(&path).exists());
        assert!(!remove_stale_temp(&path).unwrap());
    }
}
