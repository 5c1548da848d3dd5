use crate::catalog::domain::{LibraryRecord, VersionRecord};
use crate::catalog::policies::CacheValidity;
use crate::ports::outbound::RecordCache;
use std::collections::HashMap;

/// PreviousOutputCache adapter serving version records from an earlier catalog
///
/// Built from the records of the previous run's output. Records that are not
/// final are discarded at load time, so every lookup hit is safe to reuse.
#[derive(Debug, Default)]
pub struct PreviousOutputCache {
    records: HashMap<String, HashMap<String, VersionRecord>>,
}

impl PreviousOutputCache {
    pub fn from_records(libraries: Vec<LibraryRecord>) -> Self {
        let mut records: HashMap<String, HashMap<String, VersionRecord>> = HashMap::new();
        for library in libraries {
            let versions = records.entry(library.path().to_string()).or_default();
            for version in library.versions() {
                if CacheValidity::is_final(version) {
                    versions
                        .entry(version.version.clone())
                        .or_insert_with(|| version.clone());
                }
            }
        }
        Self { records }
    }

    /// Number of reusable version records
    pub fn len(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordCache for PreviousOutputCache {
    fn lookup(&self, path: &str, version: &str) -> Option<VersionRecord> {
        self.records.get(path)?.get(version).cloned()
    }
}
