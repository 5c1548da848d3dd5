use async_trait::async_trait;
use kmp_catalog::prelude::*;
use std::sync::Mutex;

/// Mock SearchIndex serving a fixed list of hits page by page
pub struct MockSearchIndex {
    hits: Vec<SearchHit>,
    failing_offset: Option<usize>,
    requests: Mutex<Vec<(usize, usize)>>,
}

impl MockSearchIndex {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            failing_offset: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Hits `group:artifact:version` for each `(artifact, version)`.
    pub fn with_artifacts(group: &str, artifacts: &[(&str, &str)]) -> Self {
        Self::new(
            artifacts
                .iter()
                .map(|(artifact, version)| hit(group, artifact, version))
                .collect(),
        )
    }

    /// Fails the page starting at `offset` with a transport error.
    pub fn failing_at(mut self, offset: usize) -> Self {
        self.failing_offset = Some(offset);
        self
    }

    /// `(offset, rows)` of every page requested so far.
    pub fn requests(&self) -> Vec<(usize, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn hit(group: &str, artifact: &str, version: &str) -> SearchHit {
    SearchHit {
        id: format!("{}:{}:{}", group, artifact, version),
        group: group.to_string(),
        artifact: artifact.to_string(),
        version: version.to_string(),
        packaging: "pom".to_string(),
        timestamp: 1622337669000,
    }
}

#[async_trait]
impl SearchIndex for MockSearchIndex {
    async fn search_page(&self, offset: usize, rows: usize) -> FetchResult<SearchPage> {
        self.requests.lock().unwrap().push((offset, rows));

        if self.failing_offset == Some(offset) {
            return Err(FetchError::Transport {
                url: format!("mock://search?start={}", offset),
                details: "connection reset by peer".to_string(),
            });
        }

        Ok(SearchPage {
            total: self.hits.len(),
            hits: self.hits.iter().skip(offset).take(rows).cloned().collect(),
        })
    }
}

#[async_trait]
impl SearchIndex for &MockSearchIndex {
    async fn search_page(&self, offset: usize, rows: usize) -> FetchResult<SearchPage> {
        (**self).search_page(offset, rows).await
    }
}
