use async_trait::async_trait;

use crate::errors::Result;
use crate::profile::profile_model::{ProfileDraft, UserProfile};

/// Trait for profile repository operations.
///
/// The store holds whole-record snapshots: saves replace the full profile
/// record, reads return `None` when the record is absent or unreadable.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_profile(&self) -> Result<Option<UserProfile>>;
    async fn save_profile(&self, profile: &UserProfile) -> Result<()>;
    fn get_onboarded(&self) -> Result<bool>;
    async fn set_onboarded(&self, onboarded: bool) -> Result<()>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, draft: ProfileDraft) -> Result<UserProfile>;
    fn is_onboarded(&self) -> Result<bool>;
    async fn complete_onboarding(&self) -> Result<()>;
}
