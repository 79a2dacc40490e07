//! SQLite storage implementation for the water log.

mod repository;

pub use repository::IntakeRepository;

// Re-export trait from core for convenience
pub use drinkminder_core::intake::IntakeRepositoryTrait;
