use chrono::NaiveDateTime;

/// Format of `lastUpdated` in `maven-metadata.xml`.
const LAST_UPDATED_FORMAT: &str = "%Y%m%d%H%M%S";

/// Release history of one artifact, from its `maven-metadata.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersioningInfo {
    pub latest: String,
    pub release: Option<String>,
    /// `yyyyMMddHHmmss` as an integer, e.g. `20210530012749`.
    pub last_updated: u64,
    /// Versions in publication order, oldest first.
    pub versions: Vec<String>,
}

impl VersioningInfo {
    pub fn last_updated_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.last_updated.to_string(), LAST_UPDATED_FORMAT).ok()
    }
}
