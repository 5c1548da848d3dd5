use super::error::FetchError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application layer and the outer adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a single remote fetch. Kept typed so callers can tell a
/// missing resource apart from a failed request.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
