/// Storage record key for the user profile
pub const PROFILE_RECORD_KEY: &str = "drinkminder_profile";

/// Storage record key for the water log
pub const LOGS_RECORD_KEY: &str = "drinkminder_logs";

/// Storage record key for the onboarding-completed flag
pub const ONBOARDED_RECORD_KEY: &str = "onboarded";

/// Suggested daily intake per kilogram of body weight, in milliliters
pub const ML_PER_KG: f64 = 33.0;

/// Days in the weekly overview series
pub const WEEKLY_SERIES_DAYS: i64 = 7;

/// Streak length unlocking the "Consistent" achievement
pub const STREAK_CONSISTENT_DAYS: u32 = 3;

/// Streak length unlocking the "Water Master" achievement
pub const STREAK_MASTER_DAYS: u32 = 7;

/// Lifetime intake unlocking the "Aquatic" achievement, in milliliters
pub const LIFETIME_AQUATIC_ML: i64 = 10_000;
