//! Database models for races, events and registration periods.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use racedb_core::races::{
    EventDetails, RaceDetails, RegistrationPeriod, StoredEvent, StoredRace,
    StoredRegistrationPeriod,
};

/// Provider-local formats, interpreted as UTC. RunSignup uses both ISO and
/// US month-first dates.
const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only values are taken as midnight.
const LOCAL_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a provider timestamp. Empty or unrecognized text yields `None`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    let parsed = LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            LOCAL_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    if parsed.is_none() {
        log::warn!("Ignoring unparseable timestamp '{}'", value);
    }
    parsed
}

/// Parse currency text such as `"$1,250.00"`. Unparseable text yields zero.
pub fn parse_fee(value: &str) -> Decimal {
    let cleaned: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned).unwrap_or_else(|e| {
        log::warn!("Failed to parse fee '{}': {}. Falling back to ZERO.", value, e);
        Decimal::ZERO
    })
}

/// Stored decimals are written by us, but stay tolerant on read.
fn parse_stored_decimal(value: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        log::error!("Failed to parse stored {} '{}': {}", field_name, value, e);
        Decimal::ZERO
    })
}

/// Database model for races
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::races)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RaceDB {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub external_url: String,
    pub logo_url: String,
    pub timezone: String,
    pub updated_at: NaiveDateTime,
}

impl RaceDB {
    pub fn from_details(details: &RaceDetails, now: NaiveDateTime) -> Self {
        Self {
            id: details.id,
            name: details.name.clone(),
            url: details.url.clone(),
            external_url: details.external_url.clone(),
            logo_url: details.logo_url.clone(),
            timezone: details.timezone.clone(),
            updated_at: now,
        }
    }

    pub fn into_stored(self, events: Vec<EventDB>) -> StoredRace {
        StoredRace {
            id: self.id,
            name: self.name,
            url: self.url,
            external_url: self.external_url,
            logo_url: self.logo_url,
            timezone: self.timezone,
            updated_at: self.updated_at,
            events: events.into_iter().map(StoredEvent::from).collect(),
        }
    }
}

/// Database model for events
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Associations,
    PartialEq,
    Debug,
    Clone,
)]
#[diesel(belongs_to(RaceDB, foreign_key = race_id))]
#[diesel(table_name = crate::schema::events)]
#[diesel(primary_key(event_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventDB {
    pub event_id: i64,
    pub race_id: i64,
    pub name: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub event_type: String,
    pub distance: String,
    pub registration_opens: Option<NaiveDateTime>,
    pub category: String,
    pub updated_at: NaiveDateTime,
}

impl EventDB {
    pub fn from_details(race_id: i64, event: &EventDetails, now: NaiveDateTime) -> Self {
        Self {
            event_id: event.event_id,
            race_id,
            name: event.name.clone(),
            start_time: parse_timestamp(&event.start_time),
            end_time: parse_timestamp(&event.end_time),
            event_type: event.event_type.clone(),
            distance: event.distance.clone(),
            registration_opens: parse_timestamp(&event.registration_opens),
            category: event.category.clone(),
            updated_at: now,
        }
    }
}

impl From<EventDB> for StoredEvent {
    fn from(db: EventDB) -> Self {
        Self {
            event_id: db.event_id,
            race_id: db.race_id,
            name: db.name,
            start_time: db.start_time,
            end_time: db.end_time,
            event_type: db.event_type,
            distance: db.distance,
            registration_opens: db.registration_opens,
            category: db.category,
            updated_at: db.updated_at,
        }
    }
}

/// Database model for registration periods
#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(EventDB, foreign_key = event_id))]
#[diesel(table_name = crate::schema::registration_periods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RegistrationPeriodDB {
    pub id: i64,
    pub event_id: i64,
    pub opens_at: Option<NaiveDateTime>,
    pub closes_at: Option<NaiveDateTime>,
    pub race_fee: String,
    pub processing_fee: String,
}

/// Database model for inserting a registration period
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::registration_periods)]
pub struct NewRegistrationPeriodDB {
    pub event_id: i64,
    pub opens_at: Option<NaiveDateTime>,
    pub closes_at: Option<NaiveDateTime>,
    pub race_fee: String,
    pub processing_fee: String,
}

impl NewRegistrationPeriodDB {
    pub fn from_period(event_id: i64, period: &RegistrationPeriod) -> Self {
        Self {
            event_id,
            opens_at: parse_timestamp(&period.opens),
            closes_at: parse_timestamp(&period.closes),
            race_fee: parse_fee(&period.fee).to_string(),
            processing_fee: parse_fee(&period.processing_fee).to_string(),
        }
    }
}

impl From<RegistrationPeriodDB> for StoredRegistrationPeriod {
    fn from(db: RegistrationPeriodDB) -> Self {
        Self {
            id: db.id,
            event_id: db.event_id,
            opens_at: db.opens_at,
            closes_at: db.closes_at,
            race_fee: parse_stored_decimal(&db.race_fee, "race_fee"),
            processing_fee: parse_stored_decimal(&db.processing_fee, "processing_fee"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_fee() {
        assert_eq!(parse_fee("$30.00"), dec!(30.00));
        assert_eq!(parse_fee(" $1,250.50 "), dec!(1250.50));
        assert_eq!(parse_fee("45"), dec!(45));
        assert_eq!(parse_fee(""), Decimal::ZERO);
        assert_eq!(parse_fee("$"), Decimal::ZERO);
        assert_eq!(parse_fee("garbage"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2025-07-04T07:30:00Z"),
            Some(at(2025, 7, 4, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2025-07-04T07:30:00-04:00"),
            Some(at(2025, 7, 4, 11, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2025-07-04 07:30"),
            Some(at(2025, 7, 4, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2025-07-04 07:30:15"),
            Some(at(2025, 7, 4, 7, 30, 15))
        );
    }

    #[test]
    fn test_parse_timestamp_month_first_dates() {
        assert_eq!(
            parse_timestamp("07/04/2025 07:30"),
            Some(at(2025, 7, 4, 7, 30, 0))
        );
        assert_eq!(
            parse_timestamp("07/04/2025 07:30:15"),
            Some(at(2025, 7, 4, 7, 30, 15))
        );
        assert_eq!(parse_timestamp("06/01/2025"), Some(at(2025, 6, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("2025-06-01"), Some(at(2025, 6, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("13/01/2025"), None);
    }

    #[test]
    fn test_parse_timestamp_invalid_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("next tuesday"), None);
    }

    #[test]
    fn test_period_fees_are_stored_as_canonical_text() {
        let period = RegistrationPeriod {
            opens: String::new(),
            closes: "bogus".to_string(),
            fee: "$85.00".to_string(),
            processing_fee: "n/a".to_string(),
        };
        let db = NewRegistrationPeriodDB::from_period(9, &period);
        assert_eq!(db.race_fee, "85.00");
        assert_eq!(db.processing_fee, "0");
        assert_eq!(db.opens_at, None);
        assert_eq!(db.closes_at, None);
    }
}
