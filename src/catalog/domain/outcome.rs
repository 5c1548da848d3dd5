use super::LibraryRecord;
use std::fmt;
use thiserror::Error;

/// Why a search hit produced no library record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    /// The descriptor at the hit's own coordinate could not be fetched.
    DescriptorFetch,
    /// No variant has the `common` platform type.
    NoCommonVariant,
    /// The common variant does not point to a canonical coordinate.
    NoCommonLocation,
    /// `maven-metadata.xml` of the canonical coordinate could not be fetched.
    VersioningFetch,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::DescriptorFetch => "descriptor-fetch-error",
            SkipReason::NoCommonVariant => "no-common-variant",
            SkipReason::NoCommonLocation => "no-common-location",
            SkipReason::VersioningFetch => "versioning-fetch-error",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A version whose descriptor could neither be fetched nor ruled absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to resolve version {version}: {reason}")]
pub struct VersionFailure {
    pub version: String,
    pub reason: String,
}

/// Per-library tally of how each version in the window was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionStats {
    /// Resolved from a fetched module descriptor.
    pub resolved: usize,
    /// Reused from the incremental cache.
    pub cached: usize,
    /// Recorded as not multiplatform because no descriptor is published.
    pub degraded: usize,
    /// Dropped after a failed fetch.
    pub failed: usize,
}

impl VersionStats {
    pub fn merge(&mut self, other: VersionStats) {
        self.resolved += other.resolved;
        self.cached += other.cached;
        self.degraded += other.degraded;
        self.failed += other.failed;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    /// Id of the search hit the record was resolved from.
    pub source_id: String,
    pub record: LibraryRecord,
    pub stats: VersionStats,
    pub failures: Vec<VersionFailure>,
}

/// Result of resolving one search hit. Never an error: failures are
/// folded into `Skipped`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactOutcome {
    Resolved(ResolvedArtifact),
    Skipped { hit_id: String, reason: SkipReason },
}
