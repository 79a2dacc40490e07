//! Profile module - user profile, draft validation, and onboarding.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::{
    random_avatar_seed, suggested_daily_goal, ProfileDraft, ReminderType, UserProfile,
    AVATAR_PRESETS,
};
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
