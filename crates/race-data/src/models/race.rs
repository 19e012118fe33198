//! Detail-query aggregate: a race, its events, and their registration periods.

use serde::{Deserialize, Serialize};

use super::{EventId, RaceId};

/// A race with its ordered events, as returned by a detail query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceDetails {
    #[serde(rename = "race_id")]
    pub id: RaceId,
    pub name: String,
    pub url: String,
    #[serde(rename = "external_race_url")]
    pub external_url: String,
    pub logo_url: String,
    pub timezone: String,
    pub events: Vec<EventDetails>,
}

/// One event (distance/course) of a race.
///
/// Temporal fields are kept as the provider sent them; the storage layer
/// parses them leniently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event_id: EventId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub event_type: String,
    pub distance: String,
    pub registration_opens: String,
    /// Display name of the resolved [`super::Category`].
    pub category: String,
    pub registration_periods: Vec<RegistrationPeriod>,
}

/// A pricing window during which registration is open at a given fee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPeriod {
    #[serde(rename = "registration_opens")]
    pub opens: String,
    #[serde(rename = "registration_closes")]
    pub closes: String,
    /// Currency text such as `"$30.00"`.
    #[serde(rename = "race_fee")]
    pub fee: String,
    #[serde(rename = "processing_fee")]
    pub processing_fee: String,
}
