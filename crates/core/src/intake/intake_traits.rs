use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::intake::intake_model::WaterLog;

/// Trait for water log repository operations.
///
/// The store holds the whole log as one record: saves replace it in full,
/// reads return an empty log when the record is absent or unreadable.
#[async_trait]
pub trait IntakeRepositoryTrait: Send + Sync {
    fn get_logs(&self) -> Result<Vec<WaterLog>>;
    async fn save_logs(&self, logs: &[WaterLog]) -> Result<()>;
}

/// Trait for water log service operations.
#[async_trait]
pub trait IntakeServiceTrait: Send + Sync {
    /// The full log in stored (insertion) order.
    fn get_logs(&self) -> Result<Vec<WaterLog>>;

    /// Newest-first view of at most `limit` entries; the stored order is
    /// left untouched.
    fn recent_logs(&self, limit: usize) -> Result<Vec<WaterLog>>;

    async fn add_water(&self, amount: i64, now: DateTime<Utc>) -> Result<WaterLog>;

    /// Removes the entry with the given id. Returns `Ok(false)` when no
    /// such entry exists; that is a no-op, not an error.
    async fn remove_water(&self, id: &str) -> Result<bool>;
}
