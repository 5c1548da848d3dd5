use super::variant_graph_resolver::VariantGraphResolver;
use super::version_record_resolver::VersionRecordResolver;
use crate::catalog::domain::{
    ArtifactOutcome, LibraryRecord, Location, ResolvedArtifact, SearchHit, SkipReason,
    VersionFailure, VersionRecord, VersionStats,
};
use crate::catalog::policies::VersionWindow;
use crate::ports::outbound::{MetadataRepository, RecordCache};
use futures::stream::{self, StreamExt};

/// Default number of versions of one library resolved concurrently.
pub const DEFAULT_MAX_CONCURRENT_VERSIONS: usize = 4;

enum VersionResolution {
    Cached(VersionRecord),
    Fetched(VersionRecord),
    Failed(VersionFailure),
}

/// ArtifactResolver turns one search hit into a library record.
///
/// The hit usually names a platform module (`lib-jvm`) whose common variant
/// points to the canonical root module (`lib`); the record is built for the
/// root module. A hit that cannot be resolved is skipped with a reason; this
/// resolver never fails the run.
pub struct ArtifactResolver<'a, R: MetadataRepository> {
    repository: &'a R,
    cache: Option<&'a dyn RecordCache>,
    window: VersionWindow,
    max_concurrent_versions: usize,
}

impl<'a, R: MetadataRepository> ArtifactResolver<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            cache: None,
            window: VersionWindow::default(),
            max_concurrent_versions: DEFAULT_MAX_CONCURRENT_VERSIONS,
        }
    }

    pub fn with_cache(mut self, cache: Option<&'a dyn RecordCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_window(mut self, window: VersionWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_max_concurrent_versions(mut self, max_concurrent_versions: usize) -> Self {
        self.max_concurrent_versions = max_concurrent_versions.max(1);
        self
    }

    pub async fn resolve(&self, hit: &SearchHit) -> ArtifactOutcome {
        let skipped = |reason: SkipReason| ArtifactOutcome::Skipped {
            hit_id: hit.id.clone(),
            reason,
        };

        let descriptor = match self
            .repository
            .fetch_module_descriptor(&hit.coordinate())
            .await
        {
            Ok(descriptor) => descriptor,
            Err(error) => {
                tracing::warn!(hit = %hit.id, %error, "skipping hit: descriptor fetch failed");
                return skipped(SkipReason::DescriptorFetch);
            }
        };

        let location = match VariantGraphResolver::<R>::common_location(&descriptor) {
            Ok(location) => location.clone(),
            Err(reason) => {
                tracing::debug!(hit = %hit.id, %reason, "skipping hit");
                return skipped(reason);
            }
        };

        let versioning = match self
            .repository
            .fetch_versioning(&location.group, &location.module)
            .await
        {
            Ok(versioning) => versioning,
            Err(error) => {
                tracing::warn!(hit = %hit.id, path = %location.path(), %error, "skipping hit: versioning fetch failed");
                return skipped(SkipReason::VersioningFetch);
            }
        };

        let selected = self.window.select(&versioning.versions);
        tracing::debug!(
            path = %location.path(),
            latest = %versioning.latest,
            updated = ?versioning.last_updated_at(),
            selected = selected.len(),
            "resolving versions"
        );
        let resolutions = self.resolve_versions(&location, &selected).await;

        let mut stats = VersionStats::default();
        let mut failures = Vec::new();
        let mut versions = Vec::with_capacity(resolutions.len());
        for resolution in resolutions {
            match resolution {
                VersionResolution::Cached(record) => {
                    stats.cached += 1;
                    versions.push(record);
                }
                VersionResolution::Fetched(record) => {
                    if record.mpp {
                        stats.resolved += 1;
                    } else {
                        stats.degraded += 1;
                    }
                    versions.push(record);
                }
                VersionResolution::Failed(failure) => {
                    tracing::warn!(path = %location.path(), %failure, "dropping version");
                    stats.failed += 1;
                    failures.push(failure);
                }
            }
        }

        let record = LibraryRecord::new(
            &location.group,
            &location.module,
            &versioning.latest,
            versioning.last_updated.to_string(),
            versions,
        );
        ArtifactOutcome::Resolved(ResolvedArtifact {
            source_id: hit.id.clone(),
            record,
            stats,
            failures,
        })
    }

    /// Resolves the selected versions concurrently, returning them in
    /// selection order.
    async fn resolve_versions(
        &self,
        location: &Location,
        versions: &[String],
    ) -> Vec<VersionResolution> {
        let path = location.path();
        let path = path.as_str();
        let resolver = VersionRecordResolver::new(self.repository);
        let resolver = &resolver;

        let mut indexed: Vec<(usize, VersionResolution)> = stream::iter(versions.iter().enumerate())
            .map(|(index, version)| async move {
                if let Some(record) = self.cache.and_then(|cache| cache.lookup(path, version)) {
                    return (index, VersionResolution::Cached(record));
                }
                let resolution = match resolver.resolve(location, version).await {
                    Ok(record) => VersionResolution::Fetched(record),
                    Err(failure) => VersionResolution::Failed(failure),
                };
                (index, resolution)
            })
            .buffer_unordered(self.max_concurrent_versions)
            .collect()
            .await;

        indexed.sort_by_key(|(index, _)| *index);
        indexed
            .into_iter()
            .map(|(_, resolution)| resolution)
            .collect()
    }
}
