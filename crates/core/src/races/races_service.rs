use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::races_model::StoredRace;
use super::races_traits::{RaceRepositoryTrait, RaceServiceTrait};
use crate::errors::{Result, ValidationError};
use racedb_race_data::{
    EventFetcher, EventFilters, FetchOutcome, RaceDataProvider, RaceDetails, RaceId,
};

/// Service for fetching races from the provider and persisting them.
pub struct RaceService {
    provider: Arc<dyn RaceDataProvider>,
    fetcher: EventFetcher,
    repository: Arc<dyn RaceRepositoryTrait>,
}

impl RaceService {
    pub fn new(
        provider: Arc<dyn RaceDataProvider>,
        repository: Arc<dyn RaceRepositoryTrait>,
    ) -> Self {
        Self {
            fetcher: EventFetcher::new(provider.clone()),
            provider,
            repository,
        }
    }
}

fn validate_race(details: &RaceDetails) -> Result<()> {
    if details.id <= 0 {
        return Err(ValidationError::InvalidInput(format!("invalid race id: {}", details.id)).into());
    }
    if let Some(event) = details.events.iter().find(|e| e.event_id <= 0) {
        return Err(ValidationError::InvalidInput(format!(
            "invalid event id {} in race {}",
            event.event_id, details.id
        ))
        .into());
    }
    Ok(())
}

#[async_trait]
impl RaceServiceTrait for RaceService {
    /// Fans the query out across event types. Partial upstream failures are
    /// returned inside the outcome, not as an error.
    async fn fetch_events(&self, filters: &EventFilters) -> Result<FetchOutcome> {
        let outcome = self.fetcher.fetch_events(filters).await?;
        if let Some(error) = &outcome.error {
            warn!(
                "Returning {} events with {} failed event types: {:?}",
                outcome.events.len(),
                error.len(),
                error.failed_event_types()
            );
        }
        Ok(outcome)
    }

    async fn fetch_race_details(&self, race_id: RaceId) -> Result<RaceDetails> {
        debug!("Fetching details for race {} from {}", race_id, self.provider.id());
        Ok(self.provider.fetch_race_details(race_id).await?)
    }

    async fn save_race(&self, details: &RaceDetails) -> Result<()> {
        validate_race(details)?;
        self.repository.save_race(details).await
    }

    async fn sync_race(&self, race_id: RaceId) -> Result<RaceDetails> {
        let details = self.fetch_race_details(race_id).await?;
        self.save_race(&details).await?;
        info!(
            "Synced race {} with {} events",
            details.id,
            details.events.len()
        );
        Ok(details)
    }

    fn get_race(&self, race_id: RaceId) -> Result<Option<StoredRace>> {
        self.repository.get_race(race_id)
    }
}
