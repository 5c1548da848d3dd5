//! Scripted in-memory repository and descriptor builders shared by the
//! resolver tests.
use crate::catalog::domain::module_descriptor::{
    COMMON_PLATFORM, KOTLIN_GROUP, KOTLIN_NATIVE_TARGET, KOTLIN_PLATFORM_TYPE,
};
use crate::catalog::domain::{
    Component, Coordinate, Creator, Dependency, Location, ModuleDescriptor, Variant,
    VersionConstraint, VersioningInfo,
};
use crate::ports::outbound::MetadataRepository;
use crate::shared::error::FetchError;
use crate::shared::FetchResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Repository answering from scripted responses.
///
/// Each descriptor coordinate owns a list of responses; call `n` receives
/// response `n`, and the last one repeats. Unknown coordinates are 404s.
#[derive(Default)]
pub struct ScriptedRepository {
    descriptors: HashMap<Coordinate, Vec<FetchResult<ModuleDescriptor>>>,
    versioning: HashMap<(String, String), FetchResult<VersioningInfo>>,
    calls: Mutex<HashMap<Coordinate, usize>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(self, descriptor: ModuleDescriptor) -> Self {
        let coordinate = descriptor.coordinate();
        self.with_responses(coordinate, vec![Ok(descriptor)])
    }

    pub fn with_responses(
        mut self,
        coordinate: Coordinate,
        responses: Vec<FetchResult<ModuleDescriptor>>,
    ) -> Self {
        self.descriptors.insert(coordinate, responses);
        self
    }

    pub fn with_versioning(mut self, group: &str, artifact: &str, info: VersioningInfo) -> Self {
        self.versioning
            .insert((group.to_string(), artifact.to_string()), Ok(info));
        self
    }

    pub fn with_versioning_error(mut self, group: &str, artifact: &str, error: FetchError) -> Self {
        self.versioning
            .insert((group.to_string(), artifact.to_string()), Err(error));
        self
    }

    pub fn calls_for(&self, coordinate: &Coordinate) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(coordinate)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl MetadataRepository for ScriptedRepository {
    async fn fetch_module_descriptor(
        &self,
        coordinate: &Coordinate,
    ) -> FetchResult<ModuleDescriptor> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(coordinate.clone()).or_insert(0);
            *count += 1;
            *count - 1
        };

        match self.descriptors.get(coordinate) {
            Some(responses) if !responses.is_empty() => {
                responses[call.min(responses.len() - 1)].clone()
            }
            _ => Err(FetchError::NotFound {
                url: format!("mock://{}", coordinate),
            }),
        }
    }

    async fn fetch_versioning(&self, group: &str, artifact: &str) -> FetchResult<VersioningInfo> {
        self.versioning
            .get(&(group.to_string(), artifact.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::NotFound {
                    url: format!("mock://{}:{}/maven-metadata.xml", group, artifact),
                })
            })
    }
}

pub fn transient(url: &str) -> FetchError {
    FetchError::Status {
        url: url.to_string(),
        status: 503,
    }
}

pub fn descriptor(group: &str, module: &str, version: &str, variants: Vec<Variant>) -> ModuleDescriptor {
    let mut created_by = BTreeMap::new();
    created_by.insert(
        "gradle".to_string(),
        Creator {
            version: "7.4.2".to_string(),
            build_id: None,
        },
    );
    ModuleDescriptor {
        component: Component {
            group: group.to_string(),
            module: module.to_string(),
            version: version.to_string(),
            attributes: BTreeMap::new(),
        },
        created_by,
        variants,
    }
}

pub fn variant(name: &str) -> Variant {
    Variant {
        name: name.to_string(),
        attributes: BTreeMap::new(),
        dependencies: None,
        available_at: None,
    }
}

pub fn common_variant(name: &str) -> Variant {
    variant(name).platform(COMMON_PLATFORM)
}

pub trait VariantExt {
    fn platform(self, platform: &str) -> Self;
    fn native_target(self, target: &str) -> Self;
    fn depends_on(self, group: &str, module: &str, constraint: VersionConstraint) -> Self;
    fn stdlib(self, requires: &str) -> Self;
    fn pointing_to(self, group: &str, module: &str, version: &str) -> Self;
}

impl VariantExt for Variant {
    fn platform(mut self, platform: &str) -> Self {
        self.attributes.insert(
            KOTLIN_PLATFORM_TYPE.to_string(),
            Value::String(platform.to_string()),
        );
        self
    }

    fn native_target(mut self, target: &str) -> Self {
        self.attributes.insert(
            KOTLIN_NATIVE_TARGET.to_string(),
            Value::String(target.to_string()),
        );
        self
    }

    fn depends_on(mut self, group: &str, module: &str, constraint: VersionConstraint) -> Self {
        self.dependencies.get_or_insert_with(Vec::new).push(Dependency {
            group: group.to_string(),
            module: module.to_string(),
            version: Some(constraint),
        });
        self
    }

    fn stdlib(self, requires: &str) -> Self {
        self.depends_on(
            KOTLIN_GROUP,
            "kotlin-stdlib",
            VersionConstraint {
                requires: Some(requires.to_string()),
                ..VersionConstraint::default()
            },
        )
    }

    fn pointing_to(mut self, group: &str, module: &str, version: &str) -> Self {
        self.available_at = Some(Location {
            url: format!("../../{module}/{version}/{module}-{version}.module"),
            group: group.to_string(),
            module: module.to_string(),
            version: version.to_string(),
        });
        self
    }
}
