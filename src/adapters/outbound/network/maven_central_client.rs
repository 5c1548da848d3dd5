use crate::catalog::domain::{Coordinate, ModuleDescriptor, SearchHit, VersioningInfo};
use crate::ports::outbound::{MetadataRepository, SearchIndex, SearchPage};
use crate::shared::error::FetchError;
use crate::shared::{FetchResult, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2";

/// Search query matching artifacts that publish Gradle module metadata.
const METADATA_QUERY: &str = "l:metadata";

#[derive(Debug, Deserialize)]
struct SearchResponseJson {
    response: SearchBodyJson,
}

#[derive(Debug, Deserialize)]
struct SearchBodyJson {
    #[serde(rename = "numFound", default)]
    num_found: usize,
    #[serde(default)]
    docs: Vec<SearchDocJson>,
}

#[derive(Debug, Deserialize)]
struct SearchDocJson {
    id: String,
    #[serde(rename = "g")]
    group: String,
    #[serde(rename = "a")]
    artifact: String,
    #[serde(rename = "v")]
    version: String,
    #[serde(rename = "p", default)]
    packaging: String,
    #[serde(default)]
    timestamp: i64,
}

impl From<SearchDocJson> for SearchHit {
    fn from(doc: SearchDocJson) -> Self {
        SearchHit {
            id: doc.id,
            group: doc.group,
            artifact: doc.artifact,
            version: doc.version,
            packaging: doc.packaging,
            timestamp: doc.timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MavenMetadataXml {
    versioning: VersioningXml,
}

#[derive(Debug, Deserialize)]
struct VersioningXml {
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    release: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    last_updated: Option<String>,
    #[serde(default)]
    versions: VersionListXml,
}

#[derive(Debug, Default, Deserialize)]
struct VersionListXml {
    #[serde(default)]
    version: Vec<String>,
}

impl VersioningXml {
    fn into_info(self, url: &str) -> FetchResult<VersioningInfo> {
        let decode_error = |details: &str| FetchError::Decode {
            url: url.to_string(),
            details: details.to_string(),
        };

        let last_updated = self
            .last_updated
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| decode_error("missing <lastUpdated>"))?
            .parse::<u64>()
            .map_err(|e| decode_error(&format!("invalid <lastUpdated>: {}", e)))?;

        let versions = self.versions.version;
        let latest = self
            .latest
            .or_else(|| self.release.clone())
            .or_else(|| versions.last().cloned())
            .ok_or_else(|| decode_error("no <latest>, <release> or <version> element"))?;

        Ok(VersioningInfo {
            latest,
            release: self.release,
            last_updated,
            versions,
        })
    }
}

/// Endpoints and limits of the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub search_url: String,
    pub repository_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    /// Backoff unit; attempt `n` waits `n × retry_delay`.
    pub retry_delay: Duration,
    /// Requests allowed in flight at once, across all callers.
    pub max_in_flight_requests: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(60),
            max_retries: 2,
            retry_delay: Duration::from_millis(500),
            max_in_flight_requests: 16,
        }
    }
}

/// MavenCentralClient adapter for the Maven Central search API and repository
///
/// This adapter implements both the SearchIndex and MetadataRepository ports.
/// One pooled reqwest client is shared by every request, and a semaphore
/// bounds how many requests are in flight at once no matter how many
/// resolutions run concurrently. Cloning the client shares both.
#[derive(Clone)]
pub struct MavenCentralClient {
    client: reqwest::Client,
    settings: ClientSettings,
    permits: Arc<Semaphore>,
}

impl MavenCentralClient {
    /// Creates a client against Maven Central with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(ClientSettings::default())
    }

    pub fn with_settings(settings: ClientSettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("kmp-catalog/{}", version);
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(settings.max_in_flight_requests.max(1))),
            settings,
        })
    }

    /// Validates a coordinate component for URL safety
    fn validate_url_component(component: &str) -> FetchResult<()> {
        let reject = |reason: &str| {
            Err(FetchError::InvalidCoordinate {
                value: component.to_string(),
                reason: reason.to_string(),
            })
        };

        if component.is_empty() {
            return reject("empty component");
        }
        if component.contains('/') || component.contains('\\') {
            return reject("contains path separators");
        }
        if component.contains("..") {
            return reject("contains '..'");
        }
        if component.contains('#') || component.contains('?') || component.contains('@') {
            return reject("contains URL-unsafe characters");
        }
        Ok(())
    }

    /// `{repository}/{group as path}/{artifact}`
    fn artifact_base_url(&self, group: &str, artifact: &str) -> FetchResult<String> {
        Self::validate_url_component(group)?;
        Self::validate_url_component(artifact)?;

        let group_path = group
            .split('.')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Ok(format!(
            "{}/{}/{}",
            self.settings.repository_url.trim_end_matches('/'),
            group_path,
            urlencoding::encode(artifact)
        ))
    }

    fn versioning_url(&self, group: &str, artifact: &str) -> FetchResult<String> {
        Ok(format!(
            "{}/maven-metadata.xml",
            self.artifact_base_url(group, artifact)?
        ))
    }

    fn descriptor_url(&self, coordinate: &Coordinate) -> FetchResult<String> {
        let base = self.artifact_base_url(coordinate.group(), coordinate.artifact())?;
        Self::validate_url_component(coordinate.version())?;
        let artifact = urlencoding::encode(coordinate.artifact());
        let version = urlencoding::encode(coordinate.version());
        Ok(format!(
            "{}/{}/{}-{}.module",
            base, version, artifact, version
        ))
    }

    fn search_url(&self, offset: usize, rows: usize) -> String {
        format!(
            "{}?q={}&start={}&rows={}",
            self.settings.search_url,
            urlencoding::encode(METADATA_QUERY),
            offset,
            rows
        )
    }

    /// Fetches a body, retrying transient failures with linear backoff
    async fn fetch_with_retry(&self, url: &str) -> FetchResult<String> {
        let mut attempt: u32 = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(error) if error.is_transient() && attempt < self.settings.max_retries => {
                    attempt += 1;
                    tracing::debug!(url, attempt, %error, "retrying request");
                    tokio::time::sleep(self.settings.retry_delay * attempt).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> FetchResult<String> {
        let transport_error = |details: String| FetchError::Transport {
            url: url.to_string(),
            details,
        };

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(e.to_string()))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let body = self.fetch_with_retry(url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            details: e.to_string(),
        })
    }
}

#[async_trait]
impl SearchIndex for MavenCentralClient {
    async fn search_page(&self, offset: usize, rows: usize) -> FetchResult<SearchPage> {
        let url = self.search_url(offset, rows);
        let page: SearchResponseJson = self.fetch_json(&url).await?;

        Ok(SearchPage {
            total: page.response.num_found,
            hits: page.response.docs.into_iter().map(SearchHit::from).collect(),
        })
    }
}

#[async_trait]
impl MetadataRepository for MavenCentralClient {
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor> {
        let url = self.descriptor_url(coordinate)?;
        self.fetch_json(&url).await
    }

    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo> {
        let url = self.versioning_url(group, artifact)?;
        let body = self.fetch_with_retry(&url).await?;

        let metadata: MavenMetadataXml =
            serde_xml_rs::from_str(&body).map_err(|e| FetchError::Decode {
                url: url.clone(),
                details: e.to_string(),
            })?;
        metadata.versioning.into_info(&url)
    }
}
