use crate::catalog::domain::VersionRecord;

/// RecordCache port for reusing version records resolved by an earlier run
///
/// Implementations return a record only when it is safe to reuse verbatim
/// (see `CacheValidity`); any other record counts as a miss.
pub trait RecordCache: Send + Sync {
    /// Looks up the record of `version` of the library at `path`
    /// (`group:artifact`)
    fn lookup(&self, path: &str, version: &str) -> Option<VersionRecord>;
}
