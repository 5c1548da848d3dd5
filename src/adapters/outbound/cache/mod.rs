/// Incremental cache adapters
mod previous_output_cache;

pub use previous_output_cache::PreviousOutputCache;
