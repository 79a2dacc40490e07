//! Hydration insight service.
//!
//! Builds the coaching prompt from the profile and recent log entries, asks
//! the provider for a structured insight, and falls back to a canned insight
//! if the provider fails or takes too long.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use log::warn;
use tokio::time::timeout;

use drinkminder_core::intake::WaterLog;
use drinkminder_core::metrics::today_total;
use drinkminder_core::profile::UserProfile;

use crate::error::AiError;
use crate::gemini::InsightProviderTrait;
use crate::insight_model::HydrationInsight;

/// Trait for fetching coaching insights.
#[async_trait]
pub trait InsightServiceTrait: Send + Sync {
    /// Fetch an insight for the current hydration state.
    ///
    /// Never fails: provider errors and timeouts degrade to the canned
    /// fallback insight. `now` carries the user's UTC offset so the prompt
    /// quotes wall-clock times.
    async fn hydration_insight(
        &self,
        profile: &UserProfile,
        logs: &[WaterLog],
        now: &DateTime<FixedOffset>,
    ) -> HydrationInsight;
}

/// Configuration for insight fetching.
pub struct InsightConfig {
    /// Ceiling on provider latency before the fallback is served.
    pub timeout: Duration,
    /// How many of the newest log entries are quoted in the prompt.
    pub recent_limit: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            recent_limit: 5,
        }
    }
}

/// Insight service backed by a pluggable provider.
pub struct InsightService {
    provider: Arc<dyn InsightProviderTrait>,
    config: InsightConfig,
}

impl InsightService {
    pub fn new(provider: Arc<dyn InsightProviderTrait>, config: InsightConfig) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl InsightServiceTrait for InsightService {
    async fn hydration_insight(
        &self,
        profile: &UserProfile,
        logs: &[WaterLog],
        now: &DateTime<FixedOffset>,
    ) -> HydrationInsight {
        let prompt = build_prompt(profile, logs, now, self.config.recent_limit);

        match timeout(self.config.timeout, self.provider.generate_insight(&prompt)).await {
            Ok(Ok(insight)) => insight,
            Ok(Err(e)) => {
                warn!("Hydration insight failed, using fallback: {}", e);
                HydrationInsight::fallback()
            }
            Err(_) => {
                warn!(
                    "Hydration insight timed out after {:?}, using fallback",
                    self.config.timeout
                );
                HydrationInsight::fallback()
            }
        }
    }
}

/// Assembles the coaching prompt: profile summary, today's running total,
/// and the newest `recent_limit` entries in log order.
pub fn build_prompt(
    profile: &UserProfile,
    logs: &[WaterLog],
    now: &DateTime<FixedOffset>,
    recent_limit: usize,
) -> String {
    let total_today = today_total(logs, now);
    let tz = now.timezone();

    let recent = logs
        .iter()
        .skip(logs.len().saturating_sub(recent_limit))
        .map(|entry| {
            format!(
                "{}ml at {}",
                entry.amount,
                entry.timestamp.with_timezone(&tz).format("%H:%M")
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "User Profile:\n\
         - Name: {name}\n\
         - Weight: {weight}kg\n\
         - Daily Goal: {goal}ml\n\
         - Current Intake: {total}ml\n\n\
         Recent activity: {recent}\n\n\
         Please analyze the hydration status and provide:\n\
         1. A status evaluation (excellent, good, average, or dehydrated).\n\
         2. A short motivational message.\n\
         3. A specific piece of personalized advice based on current progress.",
        name = profile.name,
        weight = profile.weight,
        goal = profile.daily_goal,
        total = total_today,
        recent = recent,
    )
}

// ============================================================================
// Fake Provider for Testing
// ============================================================================

/// A fake insight provider for tests: answers with a fixed insight, fails,
/// or stalls before answering.
pub struct FakeInsightProvider {
    response: Option<HydrationInsight>,
    delay: Option<Duration>,
}

impl FakeInsightProvider {
    /// Always answers with `insight`.
    pub fn with_insight(insight: HydrationInsight) -> Self {
        Self {
            response: Some(insight),
            delay: None,
        }
    }

    /// Always fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            delay: None,
        }
    }

    /// Sleeps for `delay` before answering with `insight`.
    pub fn with_delay(insight: HydrationInsight, delay: Duration) -> Self {
        Self {
            response: Some(insight),
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl InsightProviderTrait for FakeInsightProvider {
    async fn generate_insight(&self, _prompt: &str) -> Result<HydrationInsight, AiError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Some(insight) => Ok(insight.clone()),
            None => Err(AiError::provider("fake provider configured to fail")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight_model::InsightStatus;
    use chrono::{TimeZone, Utc};

    fn berlin_evening() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 8, 20, 0, 0)
            .unwrap()
    }

    fn entry(amount: i64, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> WaterLog {
        WaterLog {
            id: format!("log-{}-{}", d, h),
            amount,
            timestamp: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        }
    }

    fn coaching_insight() -> HydrationInsight {
        HydrationInsight {
            status: InsightStatus::Good,
            message: "Nice and steady.".to_string(),
            advice: "Front-load your mornings.".to_string(),
        }
    }

    #[test]
    fn test_prompt_reports_profile_and_local_day_total() {
        let profile = UserProfile::default();
        // 23:00 UTC the day before is 01:00 local, so it counts toward today.
        let logs = vec![
            entry(1000, 2024, 5, 6, 10, 0),
            entry(300, 2024, 5, 7, 23, 0),
            entry(500, 2024, 5, 8, 8, 30),
        ];

        let prompt = build_prompt(&profile, &logs, &berlin_evening(), 5);

        assert!(prompt.contains("- Name: Alex"));
        assert!(prompt.contains("- Weight: 70kg"));
        assert!(prompt.contains("- Daily Goal: 2500ml"));
        assert!(prompt.contains("- Current Intake: 800ml"));
        assert!(prompt.contains(
            "Recent activity: 1000ml at 12:00, 300ml at 01:00, 500ml at 10:30"
        ));
    }

    #[test]
    fn test_prompt_quotes_only_newest_entries_in_log_order() {
        let profile = UserProfile::default();
        let logs: Vec<WaterLog> = (0..7)
            .map(|i| entry(110 * (i + 1), 2024, 5, 8, 6 + i as u32, 0))
            .collect();

        let prompt = build_prompt(&profile, &logs, &berlin_evening(), 5);

        assert!(!prompt.contains("110ml"));
        assert!(!prompt.contains("220ml"));
        assert!(prompt.contains("330ml at 10:00, 440ml at 11:00"));
        assert!(prompt.contains("770ml at 14:00"));
    }

    #[test]
    fn test_prompt_with_empty_log() {
        let prompt = build_prompt(&UserProfile::default(), &[], &berlin_evening(), 5);
        assert!(prompt.contains("- Current Intake: 0ml"));
        assert!(prompt.contains("Recent activity: \n"));
    }

    #[tokio::test]
    async fn test_service_returns_provider_insight() {
        let service = InsightService::new(
            Arc::new(FakeInsightProvider::with_insight(coaching_insight())),
            InsightConfig::default(),
        );

        let insight = service
            .hydration_insight(&UserProfile::default(), &[], &berlin_evening())
            .await;
        assert_eq!(insight, coaching_insight());
    }

    #[tokio::test]
    async fn test_service_falls_back_on_provider_error() {
        let service = InsightService::new(
            Arc::new(FakeInsightProvider::failing()),
            InsightConfig::default(),
        );

        let insight = service
            .hydration_insight(&UserProfile::default(), &[], &berlin_evening())
            .await;
        assert_eq!(insight, HydrationInsight::fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_falls_back_on_timeout() {
        let service = InsightService::new(
            Arc::new(FakeInsightProvider::with_delay(
                coaching_insight(),
                Duration::from_secs(30),
            )),
            InsightConfig::default(),
        );

        let insight = service
            .hydration_insight(&UserProfile::default(), &[], &berlin_evening())
            .await;
        assert_eq!(insight, HydrationInsight::fallback());
    }
}
