use serde::{Deserialize, Serialize};

use super::{Category, RaceId};

/// One race returned by a list query.
///
/// The optional fields are only populated when the provider includes them
/// for the query that produced the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "race_id")]
    pub id: RaceId,
    pub name: String,
    pub url: String,
    #[serde(rename = "external_race_url")]
    pub external_url: String,
    pub logo_url: String,
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// The effective event type the category was resolved from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}
