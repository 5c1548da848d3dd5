pub mod coordinate;
pub mod library_record;
pub mod lookup;
pub mod module_descriptor;
pub mod outcome;
pub mod search_hit;
pub mod versioning;

pub use coordinate::Coordinate;
pub use library_record::{LibraryRecord, TargetInfo, VersionRecord};
pub use lookup::Lookup;
pub use module_descriptor::{
    Component, Creator, Dependency, Location, ModuleDescriptor, Variant, VersionConstraint,
};
pub use outcome::{ArtifactOutcome, ResolvedArtifact, SkipReason, VersionFailure, VersionStats};
pub use search_hit::SearchHit;
pub use versioning::VersioningInfo;
