//! Derived hydration metrics models.

use chrono::NaiveDate;
use serde::Serialize;

/// One day in the weekly overview series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntake {
    pub date: NaiveDate,
    /// Abbreviated weekday label ("Mon").
    pub label: String,
    pub total: i64,
}

/// A badge with its unlock state.
///
/// Achievements are re-derived from the log on every evaluation and never
/// persisted, so deleting entries can lock a badge again.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Everything the dashboard needs, derived in one pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HydrationMetrics {
    /// Milliliters drunk today.
    pub today_total: i64,
    /// Progress toward the daily goal, 0-100.
    pub percentage: u8,
    /// Milliliters left to reach the daily goal.
    pub remaining: i64,
    /// Consecutive days (ending today or yesterday) meeting the goal.
    pub streak: u32,
    pub achievements: Vec<Achievement>,
    pub weekly: Vec<DailyIntake>,
}
