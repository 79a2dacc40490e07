//! Pure hydration metrics.
//!
//! Every function here is a deterministic function of its arguments: the
//! reference instant is always passed in, never read from a clock. Log
//! timestamps are stored in UTC and converted to the reference instant's
//! time zone before day bucketing, so "today" means the caller's local
//! midnight-to-midnight window and the same `(profile, logs, now)` triple
//! always yields the same result.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};

use super::metrics_model::{Achievement, DailyIntake, HydrationMetrics};
use crate::constants::{
    LIFETIME_AQUATIC_ML, STREAK_CONSISTENT_DAYS, STREAK_MASTER_DAYS, WEEKLY_SERIES_DAYS,
};
use crate::intake::WaterLog;
use crate::profile::UserProfile;

/// Per-calendar-day intake sums in the given time zone.
///
/// The sum of all values equals the sum of all entry amounts: every entry
/// lands in exactly one bucket.
pub fn daily_totals<Tz: TimeZone>(logs: &[WaterLog], tz: &Tz) -> HashMap<NaiveDate, i64> {
    let mut totals = HashMap::new();
    for entry in logs {
        let day = entry.timestamp.with_timezone(tz).date_naive();
        *totals.entry(day).or_insert(0) += entry.amount;
    }
    totals
}

/// Milliliters drunk on the reference instant's calendar day.
pub fn today_total<Tz: TimeZone>(logs: &[WaterLog], now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    let today = now.date_naive();
    logs.iter()
        .filter(|entry| entry.timestamp.with_timezone(&tz).date_naive() == today)
        .map(|entry| entry.amount)
        .sum()
}

/// Progress toward the daily goal as a whole percentage, clamped to 0-100.
///
/// A goal of zero (or less) yields 0 rather than dividing by zero.
pub fn goal_percentage(today_total: i64, daily_goal: i64) -> u8 {
    if daily_goal <= 0 {
        return 0;
    }
    let ratio = (today_total as f64 / daily_goal as f64).min(1.0);
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Milliliters left to reach the daily goal, never negative.
pub fn remaining_ml(today_total: i64, daily_goal: i64) -> i64 {
    (daily_goal - today_total).max(0)
}

/// Consecutive days meeting the daily goal.
///
/// Walks backward from yesterday while the walked day has an entry in the
/// totals map and its total meets the goal; a day with no entries at all
/// breaks the walk. Today is then added if its total (0 when absent) meets
/// the goal, so a day in progress never zeroes an earned tail.
pub fn current_streak(totals: &HashMap<NaiveDate, i64>, daily_goal: i64, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today - Duration::days(1);
    while let Some(total) = totals.get(&day) {
        if *total < daily_goal {
            break;
        }
        streak += 1;
        day = day - Duration::days(1);
    }

    if totals.get(&today).copied().unwrap_or(0) >= daily_goal {
        streak += 1;
    }
    streak
}

/// The full badge catalog with unlock states evaluated.
pub fn achievements(
    logs: &[WaterLog],
    totals: &HashMap<NaiveDate, i64>,
    streak: u32,
    daily_goal: i64,
) -> Vec<Achievement> {
    let lifetime_total: i64 = logs.iter().map(|entry| entry.amount).sum();
    let any_day_met_goal = totals.values().any(|total| *total >= daily_goal);

    vec![
        Achievement {
            id: "first_sip",
            title: "First Drop",
            description: "Log your very first drink",
            icon: "fa-droplet",
            unlocked: !logs.is_empty(),
        },
        Achievement {
            id: "goal_getter",
            title: "Goal Getter",
            description: "Meet your daily goal for the first time",
            icon: "fa-bullseye",
            unlocked: any_day_met_goal,
        },
        Achievement {
            id: "streak_3",
            title: "Consistent",
            description: "Maintain a 3-day hydration streak",
            icon: "fa-fire",
            unlocked: streak >= STREAK_CONSISTENT_DAYS,
        },
        Achievement {
            id: "water_master",
            title: "Water Master",
            description: "Maintain a 7-day hydration streak",
            icon: "fa-crown",
            unlocked: streak >= STREAK_MASTER_DAYS,
        },
        Achievement {
            id: "heavy_drinker",
            title: "Aquatic",
            description: "Drink a total of 10 liters",
            icon: "fa-ocean",
            unlocked: lifetime_total >= LIFETIME_AQUATIC_ML,
        },
    ]
}

/// The last seven calendar days, oldest first, ending on the reference
/// instant's day. Days without entries appear with a total of zero.
pub fn weekly_series<Tz: TimeZone>(logs: &[WaterLog], now: &DateTime<Tz>) -> Vec<DailyIntake> {
    let totals = daily_totals(logs, &now.timezone());
    series_ending_at(&totals, now.date_naive())
}

fn series_ending_at(totals: &HashMap<NaiveDate, i64>, today: NaiveDate) -> Vec<DailyIntake> {
    (0..WEEKLY_SERIES_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DailyIntake {
                date,
                label: date.format("%a").to_string(),
                total: totals.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Derives the full dashboard summary in one pass over the log.
pub fn compute<Tz: TimeZone>(
    profile: &UserProfile,
    logs: &[WaterLog],
    now: &DateTime<Tz>,
) -> HydrationMetrics {
    let totals = daily_totals(logs, &now.timezone());
    let today = now.date_naive();
    let today_total = totals.get(&today).copied().unwrap_or(0);
    let streak = current_streak(&totals, profile.daily_goal, today);

    HydrationMetrics {
        today_total,
        percentage: goal_percentage(today_total, profile.daily_goal),
        remaining: remaining_ml(today_total, profile.daily_goal),
        streak,
        achievements: achievements(logs, &totals, streak, profile.daily_goal),
        weekly: series_ending_at(&totals, today),
    }
}
