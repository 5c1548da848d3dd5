use crate::application::resolvers::{DEFAULT_MAX_CONCURRENT_VERSIONS, DEFAULT_PAGE_SIZE};
use crate::catalog::policies::VersionWindow;

/// Default number of search hits resolved concurrently.
pub const DEFAULT_MAX_CONCURRENT_ARTIFACTS: usize = 8;

/// CatalogRequest - Internal request DTO for the catalog build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Hits requested per search page
    pub page_size: usize,
    /// Releases resolved per library
    pub version_window: VersionWindow,
    /// Search hits resolved concurrently
    pub max_concurrent_artifacts: usize,
    /// Versions of one library resolved concurrently
    pub max_concurrent_versions: usize,
}

impl CatalogRequest {
    pub fn new(
        page_size: usize,
        version_window: VersionWindow,
        max_concurrent_artifacts: usize,
        max_concurrent_versions: usize,
    ) -> Self {
        Self {
            page_size,
            version_window,
            max_concurrent_artifacts,
            max_concurrent_versions,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_version_window(mut self, version_window: VersionWindow) -> Self {
        self.version_window = version_window;
        self
    }

    pub fn with_max_concurrent_artifacts(mut self, max_concurrent_artifacts: usize) -> Self {
        self.max_concurrent_artifacts = max_concurrent_artifacts;
        self
    }

    pub fn with_max_concurrent_versions(mut self, max_concurrent_versions: usize) -> Self {
        self.max_concurrent_versions = max_concurrent_versions;
        self
    }
}

impl Default for CatalogRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAGE_SIZE,
            VersionWindow::default(),
            DEFAULT_MAX_CONCURRENT_ARTIFACTS,
            DEFAULT_MAX_CONCURRENT_VERSIONS,
        )
    }
}
