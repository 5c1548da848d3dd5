//! Resolution steps of a catalog run, from one search page to one version
//! record.
pub mod artifact_resolver;
pub mod search_pager;
pub mod variant_graph_resolver;
pub mod version_record_resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use artifact_resolver::{ArtifactResolver, DEFAULT_MAX_CONCURRENT_VERSIONS};
pub use search_pager::{SearchPager, DEFAULT_PAGE_SIZE};
pub use variant_graph_resolver::{
    VariantGraphResolver, MAX_INDIRECTION_DEPTH, MAX_INDIRECTION_RETRIES,
};
pub use version_record_resolver::VersionRecordResolver;
