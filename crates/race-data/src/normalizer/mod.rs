//! Response normalization.
//!
//! Converts raw provider payloads into flat internal entities:
//! - list responses (`{"races": [{"race": {...}}]}`) become [`Event`]s
//! - detail responses (`{"race": {..., "events": [...]}}`) become a [`RaceDetails`]
//!
//! Structure is strict: a missing `races`/`race` object, a missing identifier
//! or a value of the wrong JSON type fails with [`RaceDataError::Parse`].
//! Scalar text is lenient: absent or `null` text fields become empty strings.

mod raw;

use log::warn;

use crate::errors::RaceDataError;
use crate::models::{Event, EventDetails, RaceDetails, RegistrationPeriod};
use crate::taxonomy::classify;

use raw::{
    ProviderErrorEnvelope, RaceDetailResponse, RaceEventRecord, RaceListRecord, RaceListResponse,
    RegistrationPeriodRecord,
};

/// What kind of response is being normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeContext<'a> {
    /// A list query issued for `queried_event_type`.
    EventList { queried_event_type: &'a str },
    /// A single-race detail query.
    RaceDetails,
}

/// Output of [`normalize`], matching the context it was called with.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    Events(Vec<Event>),
    Race(RaceDetails),
}

/// Normalize a raw provider payload according to `context`.
pub fn normalize(payload: &str, context: NormalizeContext<'_>) -> Result<Normalized, RaceDataError> {
    match context {
        NormalizeContext::EventList { queried_event_type } => {
            normalize_event_list(payload, queried_event_type).map(Normalized::Events)
        }
        NormalizeContext::RaceDetails => normalize_race_details(payload).map(Normalized::Race),
    }
}

/// Normalize a list response into events, preserving upstream order.
///
/// Records without a declared event type are classified with
/// `queried_event_type`, the token the request was issued for.
pub fn normalize_event_list(
    payload: &str,
    queried_event_type: &str,
) -> Result<Vec<Event>, RaceDataError> {
    let response: RaceListResponse = parse_payload(payload, "race list")?;

    Ok(response
        .races
        .into_iter()
        .map(|entry| event_from_record(entry.race, queried_event_type))
        .collect())
}

/// Normalize a detail response, flattening race -> events -> periods.
pub fn normalize_race_details(payload: &str) -> Result<RaceDetails, RaceDataError> {
    let response: RaceDetailResponse = parse_payload(payload, "race details")?;
    let race = response.race;

    let events = race
        .events
        .unwrap_or_default()
        .into_iter()
        .map(event_details_from_record)
        .collect();

    Ok(RaceDetails {
        id: race.race_id,
        name: race.name,
        url: race.url,
        external_url: race.external_race_url,
        logo_url: race.logo_url,
        timezone: race.timezone,
        events,
    })
}

fn parse_payload<T: serde::de::DeserializeOwned>(
    payload: &str,
    what: &str,
) -> Result<T, RaceDataError> {
    serde_json::from_str::<T>(payload).map_err(|e| {
        // The provider reports some failures with a 200 and an error envelope.
        if let Ok(envelope) = serde_json::from_str::<ProviderErrorEnvelope>(payload) {
            warn!("Provider returned an error payload for {}: {}", what, envelope.error);
            return RaceDataError::Parse(format!("provider error: {}", envelope.error));
        }
        RaceDataError::Parse(format!("unexpected {} payload: {}", what, e))
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn event_from_record(record: RaceListRecord, queried_event_type: &str) -> Event {
    let effective_event_type = if record.event_type.trim().is_empty() {
        queried_event_type.to_string()
    } else {
        record.event_type
    };
    let category = classify(&effective_event_type);
    let address = record.address.unwrap_or_default();

    Event {
        id: record.race_id,
        name: record.name,
        url: record.url,
        external_url: record.external_race_url,
        logo_url: record.logo_url,
        category,
        start_date: non_empty(record.next_date),
        end_date: non_empty(record.next_end_date),
        city: non_empty(address.city),
        state: non_empty(address.state),
        zipcode: non_empty(address.zipcode),
        event_type: non_empty(effective_event_type),
    }
}

fn event_details_from_record(record: RaceEventRecord) -> EventDetails {
    let category = classify(&record.event_type);

    EventDetails {
        event_id: record.event_id,
        name: record.name,
        start_time: record.start_time,
        end_time: record.end_time,
        event_type: record.event_type,
        distance: record.distance,
        registration_opens: record.registration_opens,
        category: category.to_string(),
        registration_periods: record
            .registration_periods
            .unwrap_or_default()
            .into_iter()
            .map(period_from_record)
            .collect(),
    }
}

fn period_from_record(record: RegistrationPeriodRecord) -> RegistrationPeriod {
    RegistrationPeriod {
        opens: record.registration_opens,
        closes: record.registration_closes,
        fee: record.race_fee,
        processing_fee: record.processing_fee,
    }
}
