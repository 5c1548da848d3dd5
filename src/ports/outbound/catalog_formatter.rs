use crate::catalog::domain::LibraryRecord;
use crate::shared::Result;

/// CatalogFormatter port for rendering the final record list
pub trait CatalogFormatter {
    /// Formats the aggregated catalog
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[LibraryRecord]) -> Result<String>;
}
