pub mod cache_validity;
pub mod version_window;

pub use cache_validity::CacheValidity;
pub use version_window::VersionWindow;
