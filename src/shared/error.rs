use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The catalog was produced (possibly with skipped libraries)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Listing failure, invalid configuration, file I/O error, etc.
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure of a single HTTP fetch against the catalog or the repository.
///
/// `NotFound` is kept apart from every other variant: a missing module
/// descriptor is a legitimate answer ("this version does not publish Gradle
/// metadata"), whereas the rest mean the answer is not known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("{url} returned status code {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {details}")]
    Transport { url: String, details: String },

    #[error("Failed to decode response from {url}: {details}")]
    Decode { url: String, details: String },

    #[error("Invalid coordinate component '{value}': {reason}")]
    InvalidCoordinate { value: String, reason: String },
}

impl FetchError {
    /// Whether repeating the same request may succeed.
    ///
    /// Transport failures, throttling (429) and server errors (5xx) qualify.
    /// A decode failure does not: the same bytes would come back.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Whether the resource is permanently unavailable at this coordinate.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            FetchError::NotFound { .. } | FetchError::InvalidCoordinate { .. }
        )
    }
}

/// Run-level errors of the catalog engine.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to list catalog page at offset {offset}\n\n💡 Hint: The catalog listing must be complete; re-run once the search endpoint is reachable")]
    Listing {
        offset: usize,
        #[source]
        source: FetchError,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfiguration { message: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Malformed catalog snapshot: {path}\nDetails: {details}\n\n💡 Hint: Pass --no-cache or delete the file to rebuild the catalog from scratch")]
    SnapshotParseError { path: PathBuf, details: String },
}
