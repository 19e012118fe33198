//! Race data provider trait definitions.

use async_trait::async_trait;

use crate::errors::RaceDataError;
use crate::models::{Event, EventFilters, RaceDetails, RaceId};

/// Trait for upstream race-registration providers.
///
/// Implementations must be safe to call concurrently: the fetcher issues one
/// [`fetch_events`](Self::fetch_events) call per event type at the same time.
#[async_trait]
pub trait RaceDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "RUNSIGNUP".
    ///
    /// Used in error messages and logging.
    fn id(&self) -> &'static str;

    /// Fetch one page of races matching `filters` for a single event type.
    ///
    /// # Arguments
    ///
    /// * `filters` - The caller's filters. `filters.event_type` is ignored.
    /// * `event_type` - The taxonomy token this request is issued for. Records
    ///   without a declared event type are classified with it.
    ///
    /// # Returns
    ///
    /// The races in upstream order, or a `RaceDataError` on failure.
    async fn fetch_events(
        &self,
        filters: &EventFilters,
        event_type: &str,
    ) -> Result<Vec<Event>, RaceDataError>;

    /// Fetch a single race with its events and registration periods.
    async fn fetch_race_details(&self, race_id: RaceId) -> Result<RaceDetails, RaceDataError>;
}
