/// Application layer - Use cases, resolvers and DTOs
///
/// This layer contains the application logic that orchestrates
/// catalog services and coordinates with infrastructure through ports.
pub mod dto;
pub mod resolvers;
pub mod use_cases;
