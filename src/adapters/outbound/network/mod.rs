/// Network adapters for external API calls
mod caching_metadata_repository;
mod maven_central_client;

pub use caching_metadata_repository::CachingMetadataRepository;
pub use maven_central_client::{
    ClientSettings, MavenCentralClient, DEFAULT_REPOSITORY_URL, DEFAULT_SEARCH_URL,
};
