//! RaceDB Core - Domain entities, services, and traits.
//!
//! This crate ties the race data fetcher to persistence. It is
//! database-agnostic and defines the repository traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod races;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
