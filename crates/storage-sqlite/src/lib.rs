//! SQLite storage implementation for DrinkMinder.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `drinkminder-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the profile, onboarding flag, and water log
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! Everything else is database-agnostic and works with traits.
//!
//! Persistence uses a single key-value table (`app_store`): each domain record
//! is serialized to one JSON string under a well-known key, and every write
//! replaces the whole value. Reads come from the connection pool; writes are
//! funneled through a single writer actor.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod intake;
pub mod profile;
pub mod store;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from drinkminder-core for convenience
pub use drinkminder_core::errors::{DatabaseError, Error, Result};
