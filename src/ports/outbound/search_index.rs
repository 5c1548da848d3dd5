use crate::catalog::domain::SearchHit;
use crate::shared::FetchResult;
use async_trait::async_trait;

/// One page of catalog search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Total number of matches reported by the endpoint.
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

/// SearchIndex port for listing artifacts that publish module metadata
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Fetches up to `rows` hits starting at `offset`
    async fn search_page(&self, offset: usize, rows: usize) -> FetchResult<SearchPage>;
}
