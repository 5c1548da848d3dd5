//! kmp-catalog - catalog builder for Kotlin Multiplatform libraries
//!
//! This library lists every artifact on Maven Central that publishes Gradle
//! module metadata, resolves each one to its canonical multiplatform library,
//! and describes the most recent releases of that library: the Gradle and
//! Kotlin versions they were built with and the platforms they target. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Records, descriptors, policies and aggregation
//! - **Application Layer** (`application`): The catalog use case and its resolvers
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use kmp_catalog::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = MavenCentralClient::new()?;
//! let repository = CachingMetadataRepository::new(client.clone());
//!
//! let use_case = BuildCatalogUseCase::new(
//!     client,
//!     repository,
//!     None::<PreviousOutputCache>,
//!     StderrProgressReporter::new(),
//! );
//! let response = use_case.execute(CatalogRequest::default()).await?;
//!
//! let output = JsonCatalogFormatter::new().format(&response.records)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cache::PreviousOutputCache;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonCatalogFormatter;
    pub use crate::adapters::outbound::network::{
        CachingMetadataRepository, ClientSettings, MavenCentralClient,
    };
    pub use crate::application::dto::{CatalogRequest, CatalogResponse};
    pub use crate::application::use_cases::BuildCatalogUseCase;
    pub use crate::catalog::domain::{
        Coordinate, LibraryRecord, ModuleDescriptor, SearchHit, SkipReason, TargetInfo,
        VersionRecord, VersioningInfo,
    };
    pub use crate::catalog::policies::{CacheValidity, VersionWindow};
    pub use crate::catalog::services::Aggregator;
    pub use crate::ports::outbound::{
        CatalogFormatter, MetadataRepository, OutputPresenter, ProgressReporter, RecordCache,
        SearchIndex, SearchPage, SnapshotReader,
    };
    pub use crate::shared::error::{CatalogError, ExitCode, FetchError};
    pub use crate::shared::{FetchResult, Result};
}
