use crate::catalog::domain::VersionRecord;

/// CacheValidity policy deciding whether a previously resolved version
/// record may be reused instead of resolving the version again.
///
/// A record is final when:
/// 1. the release does not publish module metadata (`mpp == false`), or
/// 2. its Kotlin version is known.
///
/// A multiplatform record with an unknown Kotlin version is never final: the
/// unknown may stem from a failed indirection fetch in the earlier run.
pub struct CacheValidity;

impl CacheValidity {
    pub fn is_final(record: &VersionRecord) -> bool {
        !record.mpp || record.kotlin.is_some()
    }
}
