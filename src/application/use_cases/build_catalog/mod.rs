use crate::application::dto::{CatalogRequest, CatalogResponse};
use crate::application::resolvers::{ArtifactResolver, SearchPager};
use crate::catalog::domain::{ArtifactOutcome, SearchHit, SkipReason, VersionFailure, VersionStats};
use crate::catalog::services::{Aggregator, Candidate};
use crate::ports::outbound::{MetadataRepository, ProgressReporter, RecordCache, SearchIndex};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// BuildCatalogUseCase - Core use case for building the library catalog
///
/// This use case orchestrates a catalog run using generic dependency
/// injection for all infrastructure dependencies:
/// 1. List every search hit (fatal on failure)
/// 2. Resolve hits concurrently into library records or skips
/// 3. Aggregate records to one per library path
///
/// # Type Parameters
/// * `S` - SearchIndex implementation
/// * `R` - MetadataRepository implementation
/// * `C` - RecordCache implementation (optional)
/// * `P` - ProgressReporter implementation
pub struct BuildCatalogUseCase<S, R, C, P> {
    search_index: S,
    metadata_repository: R,
    record_cache: Option<C>,
    progress_reporter: P,
}

impl<S, R, C, P> BuildCatalogUseCase<S, R, C, P>
where
    S: SearchIndex,
    R: MetadataRepository,
    C: RecordCache,
    P: ProgressReporter,
{
    /// Creates a new BuildCatalogUseCase with injected dependencies
    pub fn new(
        search_index: S,
        metadata_repository: R,
        record_cache: Option<C>,
        progress_reporter: P,
    ) -> Self {
        Self {
            search_index,
            metadata_repository,
            record_cache,
            progress_reporter,
        }
    }

    /// Executes a catalog run
    ///
    /// # Errors
    /// Returns an error if the search listing fails or the request is invalid.
    /// Failures of individual hits or versions never fail the run; they are
    /// reported in the response.
    pub async fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse> {
        let hits = self.list_hits(&request).await?;
        let outcomes = self.resolve_hits(&hits, &request).await;
        let response = Self::build_response(hits.len(), outcomes);
        self.report_summary(&response);
        Ok(response)
    }

    async fn list_hits(&self, request: &CatalogRequest) -> Result<Vec<SearchHit>> {
        self.progress_reporter
            .report("🔍 Listing libraries publishing Gradle module metadata...");

        let hits = SearchPager::new(&self.search_index)
            .fetch_all_hits(request.page_size)
            .await?;

        self.progress_reporter
            .report(&format!("✅ Found {} search hit(s)", hits.len()));
        Ok(hits)
    }

    async fn resolve_hits(
        &self,
        hits: &[SearchHit],
        request: &CatalogRequest,
    ) -> Vec<ArtifactOutcome> {
        let total = hits.len();
        if total == 0 {
            return Vec::new();
        }

        self.progress_reporter
            .report("📦 Resolving library versions...");

        let cache = self
            .record_cache
            .as_ref()
            .map(|cache| cache as &dyn RecordCache);
        let resolver = ArtifactResolver::new(&self.metadata_repository)
            .with_cache(cache)
            .with_window(request.version_window)
            .with_max_concurrent_versions(request.max_concurrent_versions);
        let resolver = &resolver;

        let mut outcomes = Vec::with_capacity(total);
        let mut resolutions = stream::iter(hits)
            .map(|hit| async move { resolver.resolve(hit).await })
            .buffer_unordered(request.max_concurrent_artifacts.max(1));

        while let Some(outcome) = resolutions.next().await {
            let label = match &outcome {
                ArtifactOutcome::Resolved(artifact) => artifact.record.path().to_string(),
                ArtifactOutcome::Skipped { hit_id, .. } => hit_id.clone(),
            };
            outcomes.push(outcome);
            self.progress_reporter
                .report_progress(outcomes.len(), total, Some(&label));
        }
        outcomes
    }

    fn build_response(hits_total: usize, outcomes: Vec<ArtifactOutcome>) -> CatalogResponse {
        let mut candidates = Vec::new();
        let mut skipped: Vec<(String, SkipReason)> = Vec::new();
        let mut version_stats = VersionStats::default();
        let mut failed_versions: Vec<(String, VersionFailure)> = Vec::new();

        for outcome in outcomes {
            match outcome {
                ArtifactOutcome::Resolved(artifact) => {
                    version_stats.merge(artifact.stats);
                    let path = artifact.record.path().to_string();
                    failed_versions.extend(
                        artifact
                            .failures
                            .into_iter()
                            .map(|failure| (path.clone(), failure)),
                    );
                    candidates.push(Candidate::new(artifact.source_id, artifact.record));
                }
                ArtifactOutcome::Skipped { hit_id, reason } => skipped.push((hit_id, reason)),
            }
        }

        // Completion order is arbitrary; the response is not.
        skipped.sort();
        failed_versions.sort_by(|a, b| (&a.0, &a.1.version).cmp(&(&b.0, &b.1.version)));

        CatalogResponse::new(
            Aggregator::aggregate(candidates),
            hits_total,
            skipped,
            version_stats,
            failed_versions,
        )
    }

    fn report_summary(&self, response: &CatalogResponse) {
        for (path, failure) in &response.failed_versions {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}: {}", path, failure));
        }

        let skipped = response.skipped_by_reason();
        if !skipped.is_empty() {
            let breakdown = skipped
                .iter()
                .map(|(reason, count)| format!("{} {}", count, reason))
                .collect::<Vec<_>>()
                .join(", ");
            self.progress_reporter.report(&format!(
                "   - Skipped {} hit(s): {}",
                response.skipped.len(),
                breakdown
            ));
        }

        let stats = &response.version_stats;
        self.progress_reporter.report_completion(&format!(
            "✅ Catalog complete: {} libraries from {} hit(s); versions: {} resolved, {} cached, {} without module metadata, {} failed",
            response.records.len(),
            response.hits_total,
            stats.resolved,
            stats.cached,
            stats.degraded,
            stats.failed
        ));
    }
}
