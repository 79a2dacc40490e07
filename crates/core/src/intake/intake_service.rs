//! Water log service: validated mutations with write-through persistence.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use super::intake_model::WaterLog;
use super::intake_traits::{IntakeRepositoryTrait, IntakeServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};

/// Rejects intake amounts that are zero or negative.
pub fn validate_new_intake(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(ValidationError::InvalidInput(format!(
            "intake amount must be positive, got {} ml",
            amount
        ))
        .into());
    }
    Ok(())
}

/// Service owning the water log mutations.
///
/// The persisted record is the source of truth: every mutation loads the
/// log, applies the change, and writes the full record back, so a restart
/// can never observe a half-applied change.
pub struct IntakeService {
    intake_repository: Arc<dyn IntakeRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl IntakeService {
    pub fn new(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        IntakeService {
            intake_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl IntakeServiceTrait for IntakeService {
    fn get_logs(&self) -> Result<Vec<WaterLog>> {
        self.intake_repository.get_logs()
    }

    fn recent_logs(&self, limit: usize) -> Result<Vec<WaterLog>> {
        let mut logs = self.intake_repository.get_logs()?;
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit);
        Ok(logs)
    }

    async fn add_water(&self, amount: i64, now: DateTime<Utc>) -> Result<WaterLog> {
        validate_new_intake(amount)?;

        let entry = WaterLog::new(amount, now);
        let mut logs = self.intake_repository.get_logs()?;
        logs.push(entry.clone());
        self.intake_repository.save_logs(&logs).await?;

        debug!("Logged {} ml ({} entries total)", amount, logs.len());
        self.event_sink
            .emit(DomainEvent::water_logged(entry.id.clone(), amount));
        Ok(entry)
    }

    async fn remove_water(&self, id: &str) -> Result<bool> {
        let mut logs = self.intake_repository.get_logs()?;
        let before = logs.len();
        logs.retain(|entry| entry.id != id);
        if logs.len() == before {
            debug!("No log entry with id {}, nothing removed", id);
            return Ok(false);
        }

        self.intake_repository.save_logs(&logs).await?;
        self.event_sink.emit(DomainEvent::water_removed(id.to_string()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use chrono::TimeZone;

    use super::*;
    use crate::errors::{DatabaseError, Error};
    use crate::events::MockDomainEventSink;

    #[derive(Default)]
    struct MockIntakeRepository {
        logs: RwLock<Vec<WaterLog>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl IntakeRepositoryTrait for MockIntakeRepository {
        fn get_logs(&self) -> Result<Vec<WaterLog>> {
            Ok(self.logs.read().unwrap().clone())
        }

        async fn save_logs(&self, logs: &[WaterLog]) -> Result<()> {
            if self.fail_writes {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "disk full".to_string(),
                )));
            }
            *self.logs.write().unwrap() = logs.to_vec();
            Ok(())
        }
    }

    fn make_service(
        repository: Arc<MockIntakeRepository>,
    ) -> (IntakeService, Arc<MockDomainEventSink>) {
        let sink = Arc::new(MockDomainEventSink::new());
        let service = IntakeService::new(repository, sink.clone());
        (service, sink)
    }

    fn noon(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_add_water_appends_and_emits() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, sink) = make_service(repository.clone());

        let entry = service.add_water(250, noon(1)).await.unwrap();

        let stored = repository.get_logs().unwrap();
        assert_eq!(stored, vec![entry.clone()]);
        assert_eq!(
            sink.events(),
            vec![DomainEvent::water_logged(entry.id, 250)]
        );
    }

    #[tokio::test]
    async fn test_add_water_keeps_insertion_order() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, _) = make_service(repository.clone());

        service.add_water(150, noon(1)).await.unwrap();
        service.add_water(500, noon(2)).await.unwrap();
        service.add_water(250, noon(3)).await.unwrap();

        let amounts: Vec<i64> = repository
            .get_logs()
            .unwrap()
            .iter()
            .map(|l| l.amount)
            .collect();
        assert_eq!(amounts, vec![150, 500, 250]);
    }

    #[tokio::test]
    async fn test_add_water_rejects_non_positive_amounts() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, sink) = make_service(repository.clone());

        for amount in [0, -250] {
            let err = service.add_water(amount, noon(1)).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
        assert!(repository.get_logs().unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_add_water_propagates_write_failure() {
        let repository = Arc::new(MockIntakeRepository {
            fail_writes: true,
            ..MockIntakeRepository::default()
        });
        let (service, sink) = make_service(repository);

        let err = service.add_water(250, noon(1)).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_remove_water_deletes_matching_entry() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, sink) = make_service(repository.clone());

        let keep = service.add_water(150, noon(1)).await.unwrap();
        let gone = service.add_water(500, noon(2)).await.unwrap();

        assert!(service.remove_water(&gone.id).await.unwrap());
        assert_eq!(repository.get_logs().unwrap(), vec![keep]);
        assert!(sink
            .events()
            .contains(&DomainEvent::water_removed(gone.id)));
    }

    #[tokio::test]
    async fn test_remove_water_is_idempotent() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, sink) = make_service(repository.clone());

        let entry = service.add_water(250, noon(1)).await.unwrap();

        assert!(service.remove_water(&entry.id).await.unwrap());
        assert!(!service.remove_water(&entry.id).await.unwrap());
        assert!(!service.remove_water("missing-id").await.unwrap());

        assert!(repository.get_logs().unwrap().is_empty());
        // One removal event for the one actual removal.
        let removals = sink
            .events()
            .iter()
            .filter(|e| matches!(e, DomainEvent::WaterRemoved { .. }))
            .count();
        assert_eq!(removals, 1);
    }

    #[tokio::test]
    async fn test_recent_logs_sorts_newest_first_without_touching_store() {
        let repository = Arc::new(MockIntakeRepository::default());
        let (service, _) = make_service(repository.clone());

        service.add_water(150, noon(1)).await.unwrap();
        service.add_water(500, noon(3)).await.unwrap();
        service.add_water(250, noon(2)).await.unwrap();

        let recent = service.recent_logs(2).unwrap();
        let amounts: Vec<i64> = recent.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![500, 250]);

        // Stored order is still insertion order.
        let stored: Vec<i64> = repository
            .get_logs()
            .unwrap()
            .iter()
            .map(|l| l.amount)
            .collect();
        assert_eq!(stored, vec![150, 500, 250]);
    }
}
