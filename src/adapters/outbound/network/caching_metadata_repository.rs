use crate::catalog::domain::{Coordinate, ModuleDescriptor, VersioningInfo};
use crate::ports::outbound::MetadataRepository;
use crate::shared::FetchResult;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for a release history
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct ArtifactKey {
    group: String,
    artifact: String,
}

impl ArtifactKey {
    fn new(group: &str, artifact: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
        }
    }
}

/// CachingMetadataRepository wraps a MetadataRepository and adds in-memory caching.
///
/// Within one run the same descriptor is often requested more than once: the
/// descriptor of a search hit is also one of the versions of its library, and
/// sibling platform modules point to the same targets. Only successful
/// fetches are cached, so a failed fetch is attempted again on the next call.
pub struct CachingMetadataRepository<R: MetadataRepository> {
    inner: R,
    descriptors: Arc<DashMap<Coordinate, ModuleDescriptor>>,
    histories: Arc<DashMap<ArtifactKey, VersioningInfo>>,
}

impl<R: MetadataRepository> CachingMetadataRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            descriptors: Arc::new(DashMap::new()),
            histories: Arc::new(DashMap::new()),
        }
    }

    /// Returns the number of cached descriptors (for testing/monitoring)
    #[cfg(test)]
    pub fn cached_descriptors(&self) -> usize {
        self.descriptors.len()
    }
}

#[async_trait]
impl<R: MetadataRepository> MetadataRepository for CachingMetadataRepository<R> {
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor> {
        if let Some(cached) = self.descriptors.get(coordinate) {
            return Ok(cached.clone());
        }

        let descriptor = self.inner.fetch_module_descriptor(coordinate).await?;
        self.descriptors
            .insert(coordinate.clone(), descriptor.clone());
        Ok(descriptor)
    }

    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo> {
        let key = ArtifactKey::new(group, artifact);
        if let Some(cached) = self.histories.get(&key) {
            return Ok(cached.clone());
        }

        let info = self.inner.fetch_versioning(group, artifact).await?;
        self.histories.insert(key, info.clone());
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::Component;
    use crate::shared::error::FetchError;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock repository that tracks call counts and fails for version "bad"
    struct MockMetadataRepository {
        call_count: AtomicUsize,
    }

    impl MockMetadataRepository {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MetadataRepository for MockMetadataRepository {
        async fn fetch_module_descriptor(
            &self,
            coordinate: &Coordinate,
        ) -> FetchResult<ModuleDescriptor> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if coordinate.version() == "bad" {
                return Err(FetchError::Status {
                    url: "mock://bad".to_string(),
                    status: 500,
                });
            }
            Ok(ModuleDescriptor {
                component: Component {
                    group: coordinate.group().to_string(),
                    module: coordinate.artifact().to_string(),
                    version: coordinate.version().to_string(),
                    attributes: BTreeMap::new(),
                },
                created_by: BTreeMap::new(),
                variants: vec![],
            })
        }

        async fn fetch_versioning(
            &self,
            _group: &str,
            _artifact: &str,
        ) -> FetchResult<VersioningInfo> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(VersioningInfo {
                latest: "1.0".to_string(),
                release: None,
                last_updated: 20200101000000,
                versions: vec!["1.0".to_string()],
            })
        }
    }

    #[tokio::test]
    async fn test_descriptor_is_fetched_once() {
        let caching_repo = CachingMetadataRepository::new(MockMetadataRepository::new());
        let coordinate = Coordinate::new("com.example", "lib", "1.0");

        let first = caching_repo.fetch_module_descriptor(&coordinate).await.unwrap();
        let second = caching_repo.fetch_module_descriptor(&coordinate).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(caching_repo.inner.get_call_count(), 1);
        assert_eq!(caching_repo.cached_descriptors(), 1);
    }

    #[tokio::test]
    async fn test_versions_cached_separately() {
        let caching_repo = CachingMetadataRepository::new(MockMetadataRepository::new());

        caching_repo
            .fetch_module_descriptor(&Coordinate::new("com.example", "lib", "1.0"))
            .await
            .unwrap();
        caching_repo
            .fetch_module_descriptor(&Coordinate::new("com.example", "lib", "1.1"))
            .await
            .unwrap();

        assert_eq!(caching_repo.inner.get_call_count(), 2);
        assert_eq!(caching_repo.cached_descriptors(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let caching_repo = CachingMetadataRepository::new(MockMetadataRepository::new());
        let coordinate = Coordinate::new("com.example", "lib", "bad");

        assert!(caching_repo.fetch_module_descriptor(&coordinate).await.is_err());
        assert!(caching_repo.fetch_module_descriptor(&coordinate).await.is_err());

        assert_eq!(caching_repo.inner.get_call_count(), 2);
        assert_eq!(caching_repo.cached_descriptors(), 0);
    }

    #[tokio::test]
    async fn test_versioning_is_fetched_once() {
        let caching_repo = CachingMetadataRepository::new(MockMetadataRepository::new());

        caching_repo.fetch_versioning("com.example", "lib").await.unwrap();
        caching_repo.fetch_versioning("com.example", "lib").await.unwrap();

        assert_eq!(caching_repo.inner.get_call_count(), 1);
    }
}
