//! Concurrent fan-out over the event-type taxonomy.
//!
//! One upstream request is issued per event type in the working set. Every
//! request runs to completion; failures are recorded per event type and
//! merged into a single [`AggregateFetchError`] next to whatever events the
//! other requests returned.

use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

use crate::errors::{AggregateFetchError, CategoryFailure, RaceDataError};
use crate::models::{Event, EventFilters};
use crate::provider::RaceDataProvider;
use crate::taxonomy::{canonical_event_type, EVENT_TYPES};

/// Result of one fan-out: the merged events plus the failures, if any.
///
/// Events from successful event types are kept even when others failed.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub events: Vec<Event>,
    pub error: Option<AggregateFetchError>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Treat any per-category failure as fatal, discarding partial events.
    pub fn into_result(self) -> Result<Vec<Event>, RaceDataError> {
        match self.error {
            Some(error) => Err(RaceDataError::Aggregate(error)),
            None => Ok(self.events),
        }
    }
}

#[derive(Default)]
struct Accumulator {
    events: Vec<Event>,
    failures: Vec<CategoryFailure>,
}

/// Fans a list query out across event types and joins the results.
pub struct EventFetcher {
    provider: Arc<dyn RaceDataProvider>,
}

impl EventFetcher {
    pub fn new(provider: Arc<dyn RaceDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch events matching `filters`.
    ///
    /// Fails only when the filters are invalid, before any request is made.
    /// Upstream failures are reported through [`FetchOutcome::error`].
    pub async fn fetch_events(&self, filters: &EventFilters) -> Result<FetchOutcome, RaceDataError> {
        let working_set = working_set(filters)?;

        debug!(
            "Fetching events from {} for state '{}' across {} event types",
            self.provider.id(),
            filters.state.trim(),
            working_set.len()
        );

        let accumulator = Mutex::new(Accumulator::default());

        let tasks = working_set.iter().map(|event_type| {
            let accumulator = &accumulator;
            async move {
                let result = self.provider.fetch_events(filters, event_type).await;

                // Lock only to append; the request has already completed.
                let mut acc = accumulator.lock().unwrap_or_else(|p| p.into_inner());
                match result {
                    Ok(events) => acc.events.extend(events),
                    Err(error) => {
                        warn!("Failed to fetch event type '{}': {}", event_type, error);
                        acc.failures.push(CategoryFailure {
                            event_type: (*event_type).to_string(),
                            error,
                        });
                    }
                }
            }
        });

        futures::future::join_all(tasks).await;

        let Accumulator { events, failures } =
            accumulator.into_inner().unwrap_or_else(|p| p.into_inner());

        info!(
            "Fetched {} events from {} ({} of {} event types failed)",
            events.len(),
            self.provider.id(),
            failures.len(),
            working_set.len()
        );

        let error = if failures.is_empty() {
            None
        } else {
            Some(AggregateFetchError::new(failures))
        };

        Ok(FetchOutcome { events, error })
    }
}

/// Validate `filters` and resolve the event types to query.
fn working_set(filters: &EventFilters) -> Result<Vec<&'static str>, RaceDataError> {
    if filters.state.trim().is_empty() {
        return Err(RaceDataError::Validation(
            "state parameter is required".to_string(),
        ));
    }

    match filters
        .event_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        None => Ok(EVENT_TYPES.to_vec()),
        Some(token) => match canonical_event_type(token) {
            Some(event_type) => Ok(vec![event_type]),
            None => Err(RaceDataError::Validation(format!(
                "invalid event type '{}', must be one of: {}",
                token,
                EVENT_TYPES.join(", ")
            ))),
        },
    }
}
