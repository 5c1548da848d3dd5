use super::{Coordinate, TargetInfo};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute naming the Kotlin platform of a variant (`common`, `jvm`, `native`, ...).
pub const KOTLIN_PLATFORM_TYPE: &str = "org.jetbrains.kotlin.platform.type";
/// Attribute naming the Kotlin/Native target of a variant (`ios_arm64`, ...).
pub const KOTLIN_NATIVE_TARGET: &str = "org.jetbrains.kotlin.native.target";
/// Platform type value of the cross-platform root variant.
pub const COMMON_PLATFORM: &str = "common";
/// Group publishing the Kotlin standard library.
pub const KOTLIN_GROUP: &str = "org.jetbrains.kotlin";
/// Module name prefix shared by every standard library flavour.
pub const STDLIB_MODULE_PREFIX: &str = "kotlin-stdlib";
/// Key of the Gradle entry in `createdBy`.
pub const GRADLE_TOOL: &str = "gradle";

/// Gradle module metadata (`.module` file) of one published version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleDescriptor {
    pub component: Component,
    #[serde(rename = "createdBy", default)]
    pub created_by: BTreeMap<String, Creator>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub group: String,
    pub module: String,
    pub version: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub version: String,
    #[serde(rename = "buildId", default)]
    pub build_id: Option<String>,
}

/// One build configuration of a module.
///
/// A variant normally either lists its dependencies or points elsewhere via
/// `available_at`, but both may be present and both may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub dependencies: Option<Vec<Dependency>>,
    #[serde(rename = "available-at", default)]
    pub available_at: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub module: String,
    #[serde(default)]
    pub version: Option<VersionConstraint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VersionConstraint {
    #[serde(default)]
    pub strictly: Option<String>,
    #[serde(default)]
    pub requires: Option<String>,
    #[serde(default)]
    pub prefers: Option<String>,
}

/// Pointer from a variant to the module that actually publishes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub url: String,
    pub group: String,
    pub module: String,
    pub version: String,
}

impl ModuleDescriptor {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            &self.component.group,
            &self.component.module,
            &self.component.version,
        )
    }

    pub fn gradle_version(&self) -> Option<&str> {
        self.created_by
            .get(GRADLE_TOOL)
            .map(|creator| creator.version.as_str())
    }

    /// First variant, in declared order, whose platform type is `common`.
    pub fn common_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.is_common())
    }

    /// Platform targets keyed by variant name. Variants without a
    /// platform type are not targets and are left out.
    pub fn targets(&self) -> BTreeMap<String, TargetInfo> {
        self.variants
            .iter()
            .filter_map(|variant| {
                variant
                    .target_info()
                    .map(|target| (variant.name.clone(), target))
            })
            .collect()
    }
}

impl Variant {
    /// String value of an attribute. Non-string JSON values are ignored.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    pub fn platform_type(&self) -> Option<&str> {
        self.attribute(KOTLIN_PLATFORM_TYPE)
    }

    pub fn native_target(&self) -> Option<&str> {
        self.attribute(KOTLIN_NATIVE_TARGET)
    }

    pub fn is_common(&self) -> bool {
        self.platform_type() == Some(COMMON_PLATFORM)
    }

    pub fn target_info(&self) -> Option<TargetInfo> {
        self.platform_type().map(|platform| TargetInfo {
            platform: platform.to_string(),
            target: self.native_target().map(str::to_string),
        })
    }

    /// Version of the first Kotlin standard library dependency declared
    /// inline that carries a resolvable version constraint.
    pub fn inline_compiler_version(&self) -> Option<&str> {
        self.dependencies
            .as_deref()?
            .iter()
            .filter(|dependency| dependency.is_kotlin_stdlib())
            .find_map(Dependency::resolved_version)
    }
}

impl Dependency {
    pub fn is_kotlin_stdlib(&self) -> bool {
        self.group == KOTLIN_GROUP && self.module.starts_with(STDLIB_MODULE_PREFIX)
    }

    pub fn resolved_version(&self) -> Option<&str> {
        self.version.as_ref().and_then(VersionConstraint::resolved)
    }
}

impl VersionConstraint {
    /// `strictly`, else `requires`, else `prefers`.
    pub fn resolved(&self) -> Option<&str> {
        self.strictly
            .as_deref()
            .or(self.requires.as_deref())
            .or(self.prefers.as_deref())
    }
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.module, &self.version)
    }

    pub fn path(&self) -> String {
        format!("{}:{}", self.group, self.module)
    }
}
