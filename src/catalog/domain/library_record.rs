use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Platform exposed by one variant of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub platform: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// Normalized description of one release of a library.
///
/// Field names are part of the output contract consumed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    /// Whether the release publishes Gradle module metadata.
    pub mpp: bool,
    /// Gradle version that built the release.
    #[serde(default)]
    pub gradle: Option<String>,
    /// Kotlin version the release was compiled against, when it could be
    /// determined from published metadata.
    #[serde(default)]
    pub kotlin: Option<String>,
    #[serde(default)]
    pub targets: BTreeMap<String, TargetInfo>,
}

impl VersionRecord {
    pub fn multiplatform(
        version: impl Into<String>,
        gradle: Option<String>,
        kotlin: Option<String>,
        targets: BTreeMap<String, TargetInfo>,
    ) -> Self {
        Self {
            version: version.into(),
            mpp: true,
            gradle,
            kotlin,
            targets,
        }
    }

    /// Record for a release that publishes no module metadata.
    pub fn not_multiplatform(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            mpp: false,
            gradle: None,
            kotlin: None,
            targets: BTreeMap::new(),
        }
    }
}

/// One library of the catalog, keyed by `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    group_id: String,
    artifact_id: String,
    path: String,
    latest_version: String,
    last_updated: String,
    versions: Vec<VersionRecord>,
}

impl LibraryRecord {
    /// Builds a record, deriving `path` and keeping only the first record
    /// of each version string.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        latest_version: impl Into<String>,
        last_updated: impl Into<String>,
        versions: Vec<VersionRecord>,
    ) -> Self {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let path = format!("{}:{}", group_id, artifact_id);

        let mut seen = HashSet::new();
        let versions = versions
            .into_iter()
            .filter(|record| seen.insert(record.version.clone()))
            .collect();

        Self {
            group_id,
            artifact_id,
            path,
            latest_version: latest_version.into(),
            last_updated: last_updated.into(),
            versions,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    pub fn version(&self, version: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|record| record.version == version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_record_derives_path() {
        let record = LibraryRecord::new(
            "io.github.tyczj",
            "tweedle",
            "0.3.4",
            "20210530012749",
            vec![],
        );
        assert_eq!(record.path(), "io.github.tyczj:tweedle");
        assert_eq!(record.latest_version(), "0.3.4");
        assert_eq!(record.last_updated(), "20210530012749");
    }

    #[test]
    fn test_library_record_drops_duplicate_versions() {
        let record = LibraryRecord::new(
            "g",
            "a",
            "2.0",
            "1",
            vec![
                VersionRecord::not_multiplatform("1.0"),
                VersionRecord::multiplatform("2.0", None, None, BTreeMap::new()),
                VersionRecord::multiplatform("1.0", None, None, BTreeMap::new()),
            ],
        );

        assert_eq!(record.versions().len(), 2);
        assert!(!record.version("1.0").unwrap().mpp);
        assert!(record.version("2.0").unwrap().mpp);
    }

    #[test]
    fn test_serialized_shape() {
        let mut targets = BTreeMap::new();
        targets.insert(
            "iosArm64ApiElements".to_string(),
            TargetInfo {
                platform: "native".to_string(),
                target: Some("ios_arm64".to_string()),
            },
        );
        let record = LibraryRecord::new(
            "io.github.tyczj",
            "tweedle",
            "0.3.4",
            "20210530012749",
            vec![
                VersionRecord::not_multiplatform("0.3.3"),
                VersionRecord::multiplatform(
                    "0.3.4",
                    Some("6.8".to_string()),
                    Some("1.5.10".to_string()),
                    targets,
                ),
            ],
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "groupId": "io.github.tyczj",
                "artifactId": "tweedle",
                "path": "io.github.tyczj:tweedle",
                "latestVersion": "0.3.4",
                "lastUpdated": "20210530012749",
                "versions": [
                    { "version": "0.3.3", "mpp": false, "gradle": null, "kotlin": null, "targets": {} },
                    {
                        "version": "0.3.4",
                        "mpp": true,
                        "gradle": "6.8",
                        "kotlin": "1.5.10",
                        "targets": {
                            "iosArm64ApiElements": { "platform": "native", "target": "ios_arm64" }
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_deserialize_sparse_version_records() {
        // Older snapshots only carry `version` and `mpp` for non-multiplatform releases.
        let record: LibraryRecord = serde_json::from_value(json!({
            "groupId": "g",
            "artifactId": "a",
            "path": "g:a",
            "latestVersion": "1.0",
            "lastUpdated": "20200101000000",
            "versions": [ { "version": "1.0", "mpp": false } ],
            "github": { "name": "a" }
        }))
        .unwrap();

        assert_eq!(record.versions()[0], VersionRecord::not_multiplatform("1.0"));
    }
}
