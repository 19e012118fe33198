//! Persisted race records, read back from storage.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use racedb_race_data::models::EventId;
use racedb_race_data::RaceId;

/// A stored race with its events ordered by event id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRace {
    pub id: RaceId,
    pub name: String,
    pub url: String,
    pub external_url: String,
    pub logo_url: String,
    pub timezone: String,
    pub updated_at: NaiveDateTime,
    pub events: Vec<StoredEvent>,
}

/// A stored event. Timestamps are UTC; unparseable source values are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    pub event_id: EventId,
    pub race_id: RaceId,
    pub name: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub event_type: String,
    pub distance: String,
    pub registration_opens: Option<NaiveDateTime>,
    pub category: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRegistrationPeriod {
    pub id: i64,
    pub event_id: EventId,
    pub opens_at: Option<NaiveDateTime>,
    pub closes_at: Option<NaiveDateTime>,
    pub race_fee: Decimal,
    pub processing_fee: Decimal,
}
