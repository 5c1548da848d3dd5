use crate::catalog::domain::{Coordinate, Lookup, ModuleDescriptor, VersioningInfo};
use crate::shared::FetchResult;
use async_trait::async_trait;

/// MetadataRepository port for reading published artifact metadata
///
/// This port abstracts the Maven repository serving Gradle module metadata
/// (`.module` files) and `maven-metadata.xml` release histories.
///
/// # Async Support
/// All methods are async so many descriptors can be fetched concurrently.
/// Implementations must be `Send + Sync` to be shared across resolutions.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Fetches and parses the module descriptor of one published version
    ///
    /// # Errors
    /// Returns `FetchError::NotFound` when the version publishes no module
    /// descriptor, and another variant when the request or parsing failed.
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor>;

    /// Fetches and parses the release history of `group:artifact`
    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo>;

    /// Fetches a module descriptor, folding the error into a `Lookup`
    async fn lookup_module_descriptor(&self, coordinate: &Coordinate) -> Lookup<ModuleDescriptor> {
        self.fetch_module_descriptor(coordinate).await.into()
    }
}
