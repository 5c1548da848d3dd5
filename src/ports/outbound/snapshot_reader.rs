use crate::catalog::domain::LibraryRecord;
use crate::shared::Result;
use std::path::Path;

/// SnapshotReader port for loading a catalog written by a previous run
pub trait SnapshotReader {
    /// Reads the catalog at `path`
    ///
    /// # Returns
    /// `None` when no snapshot exists yet
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    fn read_snapshot(&self, path: &Path) -> Result<Option<Vec<LibraryRecord>>>;
}
