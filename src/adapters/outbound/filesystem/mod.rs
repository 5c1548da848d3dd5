/// Filesystem adapters: the previous-catalog snapshot reader and the
/// catalog writers
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
