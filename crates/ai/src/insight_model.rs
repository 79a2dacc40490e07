//! Hydration insight domain models.

use serde::{Deserialize, Serialize};

/// Coarse hydration verdict assigned by the coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Excellent,
    Good,
    Average,
    Dehydrated,
}

/// A coaching insight: verdict, encouragement, and one concrete tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationInsight {
    pub status: InsightStatus,
    pub message: String,
    pub advice: String,
}

impl HydrationInsight {
    /// The canned insight served whenever the provider is unavailable.
    pub fn fallback() -> Self {
        HydrationInsight {
            status: InsightStatus::Average,
            message: "Keep sipping! Every drop counts towards your health goal.".to_string(),
            advice: "Try to drink a glass of water every hour to maintain consistent hydration."
                .to_string(),
        }
    }
}
