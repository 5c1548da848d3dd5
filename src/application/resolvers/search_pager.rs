use crate::catalog::domain::SearchHit;
use crate::ports::outbound::SearchIndex;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Default number of hits requested per search page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// SearchPager lists every artifact of the search index.
///
/// Pages are requested sequentially at offsets `0, n, 2n, ...` until a page
/// comes back with fewer than `n` hits. The listing is all or nothing: a
/// failed page fails the run.
pub struct SearchPager<'a, S: SearchIndex> {
    index: &'a S,
}

impl<'a, S: SearchIndex> SearchPager<'a, S> {
    pub fn new(index: &'a S) -> Self {
        Self { index }
    }

    pub async fn fetch_all_hits(&self, page_size: usize) -> Result<Vec<SearchHit>> {
        if page_size == 0 {
            return Err(CatalogError::InvalidConfiguration {
                message: "page size must be greater than 0".to_string(),
                hint: "Use --page-size with a positive value (default: 20)".to_string(),
            }
            .into());
        }

        let mut hits = Vec::new();
        let mut offset = 0;
        loop {
            let page = self
                .index
                .search_page(offset, page_size)
                .await
                .map_err(|source| CatalogError::Listing { offset, source })?;

            let count = page.hits.len();
            tracing::debug!(offset, count, total = page.total, "fetched search page");
            hits.extend(page.hits);

            if count < page_size {
                break;
            }
            offset += page_size;
        }
        Ok(hits)
    }
}
