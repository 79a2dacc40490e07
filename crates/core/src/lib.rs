//! DrinkMinder Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for DrinkMinder.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod intake;
pub mod metrics;
pub mod profile;

// Re-export common types from the intake and metrics modules
pub use intake::*;
pub use metrics::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
