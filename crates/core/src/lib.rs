//! Forum Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for forum posts.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod posts;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
