pub mod error;
pub mod file_guard;
pub mod result;

pub use result::{FetchResult, Result};
