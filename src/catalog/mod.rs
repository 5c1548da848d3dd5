//! Catalog domain: descriptor and record models, resolution policies, and
//! the pure services that operate on fetched metadata.
pub mod domain;
pub mod policies;
pub mod services;
