//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about hydration data changes. The embedding
/// shell translates them into platform effects (sound cues, haptic feedback,
/// badge refreshes); the engine itself attaches no behavior to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A water entry was appended to the log.
    WaterLogged { id: String, amount: i64 },

    /// A water entry was removed from the log.
    WaterRemoved { id: String },

    /// The profile record was replaced.
    ProfileUpdated,

    /// The onboarding flag was set.
    OnboardingCompleted,
}

impl DomainEvent {
    /// Creates a WaterLogged event.
    pub fn water_logged(id: String, amount: i64) -> Self {
        Self::WaterLogged { id, amount }
    }

    /// Creates a WaterRemoved event.
    pub fn water_removed(id: String) -> Self {
        Self::WaterRemoved { id }
    }

    /// Creates a ProfileUpdated event.
    pub fn profile_updated() -> Self {
        Self::ProfileUpdated
    }

    /// Creates an OnboardingCompleted event.
    pub fn onboarding_completed() -> Self {
        Self::OnboardingCompleted
    }
}
