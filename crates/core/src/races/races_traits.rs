use async_trait::async_trait;

use super::races_model::{StoredRace, StoredRegistrationPeriod};
use crate::errors::Result;
use racedb_race_data::models::EventId;
use racedb_race_data::{EventFilters, FetchOutcome, RaceDetails, RaceId};

/// Trait for race repository operations
#[async_trait]
pub trait RaceRepositoryTrait: Send + Sync {
    /// Persist a race with its events and registration periods in one
    /// transaction. Races and events are upserted; periods are appended.
    async fn save_race(&self, details: &RaceDetails) -> Result<()>;

    fn get_race(&self, race_id: RaceId) -> Result<Option<StoredRace>>;

    fn get_registration_periods(&self, event_id: EventId) -> Result<Vec<StoredRegistrationPeriod>>;
}

/// Trait for race service operations
#[async_trait]
pub trait RaceServiceTrait: Send + Sync {
    async fn fetch_events(&self, filters: &EventFilters) -> Result<FetchOutcome>;
    async fn fetch_race_details(&self, race_id: RaceId) -> Result<RaceDetails>;
    async fn save_race(&self, details: &RaceDetails) -> Result<()>;
    /// Fetch a race from the provider and persist it.
    async fn sync_race(&self, race_id: RaceId) -> Result<RaceDetails>;
    fn get_race(&self, race_id: RaceId) -> Result<Option<StoredRace>>;
}
