/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach the
/// catalog search endpoint, the Maven repository, the previous catalog
/// snapshot, and the console.
pub mod catalog_formatter;
pub mod metadata_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_cache;
pub mod search_index;
pub mod snapshot_reader;

pub use catalog_formatter::CatalogFormatter;
pub use metadata_repository::MetadataRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_cache::RecordCache;
pub use search_index::{SearchIndex, SearchPage};
pub use snapshot_reader::SnapshotReader;
