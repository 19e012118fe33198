//! Race data models
//!
//! This module contains the core data types for race data operations:
//! - `types` - Type aliases for identifiers (RaceId, EventId)
//! - `category` - Closed event classification (Category)
//! - `event` - List-query result (Event)
//! - `race` - Detail-query aggregate (RaceDetails, EventDetails, RegistrationPeriod)
//! - `filters` - List-query filters (EventFilters, DateRange, DistanceRange)

mod category;
mod event;
mod filters;
mod race;
mod types;

pub use category::Category;
pub use event::Event;
pub use filters::{DateRange, DistanceRange, EventFilters};
pub use race::{EventDetails, RaceDetails, RegistrationPeriod};
pub use types::{EventId, RaceId};
