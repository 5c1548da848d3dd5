use crate::catalog::domain::{LibraryRecord, SkipReason, VersionFailure, VersionStats};
use std::collections::BTreeMap;

/// CatalogResponse - Internal response DTO from the catalog build use case
///
/// Carries the aggregated records together with everything that did not make
/// it into them, so adapters can report the run.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    /// One record per library path, sorted by path
    pub records: Vec<LibraryRecord>,
    /// Number of hits returned by the search listing
    pub hits_total: usize,
    /// Hits that produced no record, as (hit id, reason)
    pub skipped: Vec<(String, SkipReason)>,
    /// Version tally over every resolved hit, including discarded duplicates
    pub version_stats: VersionStats,
    /// Versions dropped after failed fetches, as (library path, failure)
    pub failed_versions: Vec<(String, VersionFailure)>,
}

impl CatalogResponse {
    pub fn new(
        records: Vec<LibraryRecord>,
        hits_total: usize,
        skipped: Vec<(String, SkipReason)>,
        version_stats: VersionStats,
        failed_versions: Vec<(String, VersionFailure)>,
    ) -> Self {
        Self {
            records,
            hits_total,
            skipped,
            version_stats,
            failed_versions,
        }
    }

    /// Number of skipped hits per reason
    pub fn skipped_by_reason(&self) -> BTreeMap<SkipReason, usize> {
        let mut counts = BTreeMap::new();
        for (_, reason) in &self.skipped {
            *counts.entry(*reason).or_insert(0) += 1;
        }
        counts
    }
}
