//! RaceDB Race Data Crate
//!
//! This crate fetches race listings and race details from an upstream
//! race-registration provider (RunSignup) and turns them into flat,
//! provider-agnostic models.
//!
//! # Overview
//!
//! The race data crate supports:
//! - A closed category taxonomy for the provider's event-type vocabulary
//! - Normalization of nested provider payloads into internal entities
//! - A concurrent fan-out fetcher, one request per event type
//! - Partial-failure aggregation so successfully fetched events are never lost
//!
//! # Architecture
//!
//! ```text
//!                          +------------------+
//!                          |   EventFilters   |  (caller input)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   EventFetcher   |  (fan-out / join)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | RaceDataProvider |  (RunSignup, ...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Normalizer    |  (raw JSON -> models)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Classifier    |  (event type -> Category)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Event`] - One race returned by a list query
//! - [`RaceDetails`] - A race with its events and registration periods
//! - [`Category`] - Closed classification of event types
//! - [`EventFilters`] - Filters for a list query
//! - [`FetchOutcome`] - Merged events plus the aggregated failures of a fan-out

pub mod errors;
pub mod fetcher;
pub mod models;
pub mod normalizer;
pub mod provider;
pub mod taxonomy;

pub use errors::{AggregateFetchError, CategoryFailure, RaceDataError};

pub use models::{
    Category, DateRange, DistanceRange, Event, EventDetails, EventFilters, RaceDetails,
    RaceId, RegistrationPeriod,
};

pub use fetcher::{EventFetcher, FetchOutcome};

pub use normalizer::{
    normalize, normalize_event_list, normalize_race_details, NormalizeContext, Normalized,
};

pub use provider::runsignup::{RunSignupConfig, RunSignupProvider};
pub use provider::RaceDataProvider;

pub use taxonomy::{classify, is_valid_event_type, EVENT_TYPES};
