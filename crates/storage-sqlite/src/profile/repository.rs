use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use crate::db::{DbPool, WriteHandle};
use crate::store::{fetch_record, replace_record};
use drinkminder_core::constants::{ONBOARDED_RECORD_KEY, PROFILE_RECORD_KEY};
use drinkminder_core::errors::Result;
use drinkminder_core::profile::{ProfileRepositoryTrait, UserProfile};

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_profile(&self) -> Result<Option<UserProfile>> {
        let raw = match fetch_record(&self.pool, PROFILE_RECORD_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        // A record that no longer parses is treated as absent.
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("Discarding corrupt profile record: {}", e);
                Ok(None)
            }
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let payload = serde_json::to_string(profile)?;
        self.writer
            .exec(move |conn| replace_record(conn, PROFILE_RECORD_KEY, payload))
            .await
    }

    fn get_onboarded(&self) -> Result<bool> {
        let flag = fetch_record(&self.pool, ONBOARDED_RECORD_KEY)?;
        Ok(flag.map(|v| v.parse().unwrap_or(false)).unwrap_or(false))
    }

    async fn set_onboarded(&self, onboarded: bool) -> Result<()> {
        self.writer
            .exec(move |conn| replace_record(conn, ONBOARDED_RECORD_KEY, onboarded.to_string()))
            .await
    }
}
