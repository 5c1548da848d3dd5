use async_trait::async_trait;
use kmp_catalog::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock MetadataRepository backed by in-memory descriptors
///
/// Coordinates without a descriptor answer `NotFound`. Coordinates marked
/// unavailable answer a 503 on every attempt.
#[derive(Default)]
pub struct MockMetadataRepository {
    descriptors: HashMap<Coordinate, ModuleDescriptor>,
    versioning: HashMap<String, VersioningInfo>,
    unavailable: HashSet<Coordinate>,
    descriptor_calls: AtomicUsize,
    versioning_calls: AtomicUsize,
}

impl MockMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `.module` document, keyed by its own component coordinate
    /// unless `at` says otherwise.
    pub fn with_module_json(mut self, json: &str, at: Option<Coordinate>) -> Self {
        let descriptor: ModuleDescriptor =
            serde_json::from_str(json).expect("fixture module must parse");
        let coordinate = at.unwrap_or_else(|| {
            Coordinate::new(
                &descriptor.component.group,
                &descriptor.component.module,
                &descriptor.component.version,
            )
        });
        self.descriptors.insert(coordinate, descriptor);
        self
    }

    pub fn with_versioning(
        mut self,
        group: &str,
        artifact: &str,
        versions: &[&str],
        last_updated: u64,
    ) -> Self {
        let info = VersioningInfo {
            latest: versions.last().map(|v| v.to_string()).unwrap_or_default(),
            release: None,
            last_updated,
            versions: versions.iter().map(|v| v.to_string()).collect(),
        };
        self.versioning.insert(format!("{}:{}", group, artifact), info);
        self
    }

    pub fn with_unavailable(mut self, coordinate: Coordinate) -> Self {
        self.unavailable.insert(coordinate);
        self
    }

    pub fn descriptor_calls(&self) -> usize {
        self.descriptor_calls.load(Ordering::SeqCst)
    }

    pub fn versioning_calls(&self) -> usize {
        self.versioning_calls.load(Ordering::SeqCst)
    }

    fn url(coordinate: &Coordinate) -> String {
        format!("mock://{}:{}", coordinate.path(), coordinate.version())
    }
}

#[async_trait]
impl MetadataRepository for MockMetadataRepository {
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor> {
        self.descriptor_calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.contains(coordinate) {
            return Err(FetchError::Status {
                url: Self::url(coordinate),
                status: 503,
            });
        }
        self.descriptors
            .get(coordinate)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: Self::url(coordinate),
            })
    }

    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo> {
        self.versioning_calls.fetch_add(1, Ordering::SeqCst);

        let key = format!("{}:{}", group, artifact);
        self.versioning
            .get(&key)
            .cloned()
            .ok_or(FetchError::NotFound {
                url: format!("mock://{}/maven-metadata.xml", key),
            })
    }
}

/// Lets a test keep the mock to inspect call counts after the run.
#[async_trait]
impl MetadataRepository for &MockMetadataRepository {
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor> {
        (**self).fetch_module_descriptor(coordinate).await
    }

    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo> {
        (**self).fetch_versioning(group, artifact).await
    }
}
