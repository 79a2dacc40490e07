//! SQLite storage implementation for the user profile and onboarding flag.

mod repository;

pub use repository::ProfileRepository;

// Re-export trait from core for convenience
pub use drinkminder_core::profile::ProfileRepositoryTrait;
