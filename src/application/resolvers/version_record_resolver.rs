use super::variant_graph_resolver::VariantGraphResolver;
use crate::catalog::domain::{Coordinate, Location, Lookup, VersionFailure, VersionRecord};
use crate::ports::outbound::MetadataRepository;

/// VersionRecordResolver turns one release of a canonical location into a
/// version record.
///
/// A release without a module descriptor is a legitimate "not multiplatform"
/// answer. A release whose descriptor could not be fetched is a failure: it
/// must not be recorded, otherwise the next run would treat the guess as final.
pub struct VersionRecordResolver<'a, R: MetadataRepository> {
    repository: &'a R,
}

impl<'a, R: MetadataRepository> VersionRecordResolver<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn resolve(
        &self,
        location: &Location,
        version: &str,
    ) -> Result<VersionRecord, VersionFailure> {
        let coordinate = Coordinate::new(&location.group, &location.module, version);

        match self.repository.lookup_module_descriptor(&coordinate).await {
            Lookup::Found(descriptor) => {
                let kotlin = VariantGraphResolver::new(self.repository)
                    .find_compiler_version(&descriptor)
                    .await;
                Ok(VersionRecord::multiplatform(
                    version,
                    descriptor.gradle_version().map(str::to_string),
                    kotlin,
                    descriptor.targets(),
                ))
            }
            Lookup::NotFound => {
                tracing::debug!(%coordinate, "no module metadata published");
                Ok(VersionRecord::not_multiplatform(version))
            }
            Lookup::TransientError(reason) => Err(VersionFailure {
                version: version.to_string(),
                reason,
            }),
        }
    }
}
