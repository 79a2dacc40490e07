use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use crate::db::{DbPool, WriteHandle};
use crate::store::{fetch_record, replace_record};
use drinkminder_core::constants::LOGS_RECORD_KEY;
use drinkminder_core::errors::Result;
use drinkminder_core::intake::{IntakeRepositoryTrait, WaterLog};

pub struct IntakeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IntakeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        IntakeRepository { pool, writer }
    }
}

#[async_trait]
impl IntakeRepositoryTrait for IntakeRepository {
    fn get_logs(&self) -> Result<Vec<WaterLog>> {
        let raw = match fetch_record(&self.pool, LOGS_RECORD_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        // A record that no longer parses is treated as absent.
        match serde_json::from_str(&raw) {
            Ok(logs) => Ok(logs),
            Err(e) => {
                warn!("Discarding corrupt water log record: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_logs(&self, logs: &[WaterLog]) -> Result<()> {
        let payload = serde_json::to_string(logs)?;
        self.writer
            .exec(move |conn| replace_record(conn, LOGS_RECORD_KEY, payload))
            .await
    }
}
