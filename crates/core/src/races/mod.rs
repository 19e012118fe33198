//! Races module - domain models, services, and traits.

mod races_model;
mod races_service;
mod races_traits;


// Re-export the public interface
pub use races_model::{StoredEvent, StoredRace, StoredRegistrationPeriod};
pub use races_service::RaceService;
pub use races_traits::{RaceRepositoryTrait, RaceServiceTrait};

// Fetch-side models are owned by the race data crate.
pub use racedb_race_data::models::EventId;
pub use racedb_race_data::{
    Category, Event, EventDetails, EventFilters, FetchOutcome, RaceDetails, RaceId,
    RegistrationPeriod,
};
