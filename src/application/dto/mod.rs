/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the catalog domain isolated.
mod catalog_request;
mod catalog_response;

pub use catalog_request::{CatalogRequest, DEFAULT_MAX_CONCURRENT_ARTIFACTS};
pub use catalog_response::CatalogResponse;
