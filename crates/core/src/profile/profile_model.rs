//! Profile domain models.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::ML_PER_KG;
use crate::errors::{Result, ValidationError};

/// Seeds offered by the avatar picker.
pub const AVATAR_PRESETS: [&str; 8] = [
    "Felix", "Aneka", "Mason", "Jude", "Caspian", "Avery", "Rylee", "Emery",
];

/// Reminder delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    /// Remind every `reminder_frequency` minutes.
    Interval,
    /// Remind at the wall-clock times in `scheduled_times`.
    Scheduled,
}

/// Domain model representing the user profile.
///
/// Serialized field names match the persisted record format. Every field
/// defaults, so records written by older builds that lack a newer field
/// still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub avatar_seed: String,
    /// Body weight in kilograms. Zero means unset.
    pub weight: f64,
    /// Daily intake goal in milliliters. Zero means unset.
    pub daily_goal: i64,
    pub reminder_type: ReminderType,
    /// Minutes between interval reminders.
    pub reminder_frequency: i64,
    /// "HH:MM" 24h wall-clock times, unique and sorted ascending.
    pub scheduled_times: Vec<String>,
    pub haptic_enabled: bool,
    pub dark_mode_enabled: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "Alex".to_string(),
            avatar_seed: "Alex".to_string(),
            weight: 70.0,
            daily_goal: 2500,
            reminder_type: ReminderType::Interval,
            reminder_frequency: 60,
            scheduled_times: [
                "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            haptic_enabled: true,
            dark_mode_enabled: false,
        }
    }
}

/// Editable mirror of [`UserProfile`] with form-typed numeric fields.
///
/// The settings form holds weight and daily goal as raw strings until the
/// user commits; [`ProfileDraft::into_profile`] performs the coercion and
/// validation at that boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub name: String,
    pub avatar_seed: String,
    pub weight: String,
    pub daily_goal: String,
    pub reminder_type: ReminderType,
    pub reminder_frequency: i64,
    pub scheduled_times: Vec<String>,
    pub haptic_enabled: bool,
    pub dark_mode_enabled: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        ProfileDraft::from_profile(&UserProfile::default())
    }
}

impl ProfileDraft {
    /// Build a draft from a stored profile, formatting numbers back to
    /// strings. An empty avatar seed falls back to the display name.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let avatar_seed = if profile.avatar_seed.is_empty() {
            profile.name.clone()
        } else {
            profile.avatar_seed.clone()
        };

        ProfileDraft {
            name: profile.name.clone(),
            avatar_seed,
            weight: profile.weight.to_string(),
            daily_goal: profile.daily_goal.to_string(),
            reminder_type: profile.reminder_type,
            reminder_frequency: profile.reminder_frequency,
            scheduled_times: profile.scheduled_times.clone(),
            haptic_enabled: profile.haptic_enabled,
            dark_mode_enabled: profile.dark_mode_enabled,
        }
    }

    /// Validate and coerce the draft into a profile.
    ///
    /// Numeric fields follow form semantics: empty or unparseable input
    /// coerces to zero, negative values are rejected, zero is accepted.
    /// Scheduled times are deduplicated and sorted ascending.
    pub fn into_profile(self) -> Result<UserProfile> {
        let weight = parse_weight(&self.weight)?;
        let daily_goal = parse_daily_goal(&self.daily_goal)?;

        let mut scheduled_times = self.scheduled_times;
        scheduled_times.sort();
        scheduled_times.dedup();

        Ok(UserProfile {
            name: self.name,
            avatar_seed: self.avatar_seed,
            weight,
            daily_goal,
            reminder_type: self.reminder_type,
            reminder_frequency: self.reminder_frequency,
            scheduled_times,
            haptic_enabled: self.haptic_enabled,
            dark_mode_enabled: self.dark_mode_enabled,
        })
    }
}

fn parse_weight(input: &str) -> Result<f64> {
    let weight = input.trim().parse::<f64>().unwrap_or(0.0);
    if !weight.is_finite() {
        return Err(
            ValidationError::InvalidInput(format!("weight is not a number: '{}'", input)).into(),
        );
    }
    if weight < 0.0 {
        return Err(ValidationError::NegativeValue {
            field: "weight",
            value: weight,
        }
        .into());
    }
    Ok(weight)
}

fn parse_daily_goal(input: &str) -> Result<i64> {
    let goal = input.trim().parse::<f64>().map(f64::trunc).unwrap_or(0.0);
    if !goal.is_finite() {
        return Err(
            ValidationError::InvalidInput(format!("dailyGoal is not a number: '{}'", input)).into(),
        );
    }
    if goal < 0.0 {
        return Err(ValidationError::NegativeValue {
            field: "dailyGoal",
            value: goal,
        }
        .into());
    }
    Ok(goal as i64)
}

/// Suggested daily intake for a body weight, in milliliters.
///
/// The rule of thumb behind the "auto-calculate goal" action: 33 ml per
/// kilogram, rounded to the nearest milliliter.
pub fn suggested_daily_goal(weight_kg: f64) -> i64 {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return 0;
    }
    (weight_kg * ML_PER_KG).round() as i64
}

/// Random alphanumeric seed for the avatar renderer.
pub fn random_avatar_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_starting_values() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.avatar_seed, "Alex");
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.daily_goal, 2500);
        assert_eq!(profile.reminder_type, ReminderType::Interval);
        assert_eq!(profile.reminder_frequency, 60);
        assert_eq!(profile.scheduled_times.len(), 8);
        assert!(profile.haptic_enabled);
        assert!(!profile.dark_mode_enabled);
    }

    #[test]
    fn test_profile_record_field_names_are_camel_case() {
        let json = serde_json::to_string(&UserProfile::default()).unwrap();
        assert!(json.contains("\"avatarSeed\""));
        assert!(json.contains("\"dailyGoal\""));
        assert!(json.contains("\"reminderType\":\"interval\""));
        assert!(json.contains("\"scheduledTimes\""));
        assert!(json.contains("\"hapticEnabled\""));
        assert!(json.contains("\"darkModeEnabled\""));
    }

    #[test]
    fn test_partial_record_fills_missing_fields_with_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Sam","dailyGoal":3000}"#).unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.daily_goal, 3000);
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.reminder_type, ReminderType::Interval);
    }

    #[test]
    fn test_draft_round_trips_numbers_as_strings() {
        let draft = ProfileDraft::from_profile(&UserProfile::default());
        assert_eq!(draft.weight, "70");
        assert_eq!(draft.daily_goal, "2500");

        let profile = draft.into_profile().unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_draft_falls_back_to_name_for_empty_avatar_seed() {
        let stored = UserProfile {
            avatar_seed: String::new(),
            name: "Casey".to_string(),
            ..UserProfile::default()
        };
        let draft = ProfileDraft::from_profile(&stored);
        assert_eq!(draft.avatar_seed, "Casey");
    }

    #[test]
    fn test_draft_coerces_blank_and_garbage_numbers_to_zero() {
        let draft = ProfileDraft {
            weight: "".to_string(),
            daily_goal: "not a number".to_string(),
            ..ProfileDraft::default()
        };
        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.weight, 0.0);
        assert_eq!(profile.daily_goal, 0);
    }

    #[test]
    fn test_draft_truncates_fractional_goal() {
        let draft = ProfileDraft {
            daily_goal: "2500.9".to_string(),
            ..ProfileDraft::default()
        };
        assert_eq!(draft.into_profile().unwrap().daily_goal, 2500);
    }

    #[test]
    fn test_draft_rejects_negative_weight() {
        let draft = ProfileDraft {
            weight: "-4".to_string(),
            ..ProfileDraft::default()
        };
        let err = draft.into_profile().unwrap_err();
        assert!(matches!(
            err,
            crate::errors::Error::Validation(ValidationError::NegativeValue { field: "weight", .. })
        ));
    }

    #[test]
    fn test_draft_rejects_negative_goal() {
        let draft = ProfileDraft {
            daily_goal: "-100".to_string(),
            ..ProfileDraft::default()
        };
        let err = draft.into_profile().unwrap_err();
        assert!(matches!(
            err,
            crate::errors::Error::Validation(ValidationError::NegativeValue {
                field: "dailyGoal",
                ..
            })
        ));
    }

    #[test]
    fn test_draft_rejects_non_finite_weight() {
        let draft = ProfileDraft {
            weight: "NaN".to_string(),
            ..ProfileDraft::default()
        };
        assert!(draft.into_profile().is_err());

        let draft = ProfileDraft {
            weight: "inf".to_string(),
            ..ProfileDraft::default()
        };
        assert!(draft.into_profile().is_err());
    }

    #[test]
    fn test_draft_sorts_and_dedups_scheduled_times() {
        let draft = ProfileDraft {
            scheduled_times: vec![
                "12:00".to_string(),
                "08:00".to_string(),
                "12:00".to_string(),
                "09:30".to_string(),
            ],
            ..ProfileDraft::default()
        };
        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.scheduled_times, vec!["08:00", "09:30", "12:00"]);
    }

    #[test]
    fn test_suggested_goal_rounds_weight_rule() {
        assert_eq!(suggested_daily_goal(70.0), 2310);
        assert_eq!(suggested_daily_goal(70.5), 2327); // 2326.5 rounds up
        assert_eq!(suggested_daily_goal(0.0), 0);
        assert_eq!(suggested_daily_goal(-10.0), 0);
        assert_eq!(suggested_daily_goal(f64::NAN), 0);
    }

    #[test]
    fn test_random_avatar_seed_shape() {
        let seed = random_avatar_seed();
        assert_eq!(seed.len(), 8);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
        // Two draws colliding would mean a broken RNG.
        assert_ne!(random_avatar_seed(), seed);
    }
}
