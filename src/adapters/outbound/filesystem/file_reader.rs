use crate::catalog::domain::LibraryRecord;
use crate::ports::outbound::SnapshotReader;
use crate::shared::error::CatalogError;
use crate::shared::file_guard::{ensure_regular_file, MAX_SNAPSHOT_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// FileSystemReader adapter for reading catalog snapshots from the file system
///
/// This adapter implements the SnapshotReader port. A snapshot is the JSON
/// catalog written by an earlier run.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_snapshot(&self, path: &Path) -> Result<Option<Vec<LibraryRecord>>> {
        match fs::symlink_metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            _ => {}
        }

        ensure_regular_file(path, MAX_SNAPSHOT_SIZE).map_err(|e| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let records: Vec<LibraryRecord> =
            serde_json::from_str(&content).map_err(|e| CatalogError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(Some(records))
    }
}
