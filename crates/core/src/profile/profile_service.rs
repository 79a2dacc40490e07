//! Profile service: stored profile and onboarding flag.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::profile_model::{ProfileDraft, UserProfile};
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ProfileService {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        ProfileService {
            profile_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    /// Returns the stored profile, or the default profile when the record
    /// is absent or unreadable.
    fn get_profile(&self) -> Result<UserProfile> {
        match self.profile_repository.get_profile()? {
            Some(profile) => Ok(profile),
            None => {
                debug!("No stored profile, falling back to defaults");
                Ok(UserProfile::default())
            }
        }
    }

    /// Validates the draft and replaces the stored profile with it.
    async fn update_profile(&self, draft: ProfileDraft) -> Result<UserProfile> {
        let profile = draft.into_profile()?;
        self.profile_repository.save_profile(&profile).await?;
        self.event_sink.emit(DomainEvent::profile_updated());
        Ok(profile)
    }

    fn is_onboarded(&self) -> Result<bool> {
        self.profile_repository.get_onboarded()
    }

    async fn complete_onboarding(&self) -> Result<()> {
        self.profile_repository.set_onboarded(true).await?;
        self.event_sink.emit(DomainEvent::onboarding_completed());
        Ok(())
    }
}
