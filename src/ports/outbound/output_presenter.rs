use crate::shared::Result;

/// OutputPresenter port for handing the formatted catalog to its destination
/// (a file, stdout)
pub trait OutputPresenter {
    /// Presents the formatted catalog
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
