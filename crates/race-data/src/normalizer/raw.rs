//! Wire structures for RunSignup JSON responses.

use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// List query: GET /races
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct RaceListResponse {
    pub races: Vec<RaceListEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceListEntry {
    pub race: RaceListRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceListRecord {
    #[serde(deserialize_with = "provider_id")]
    pub race_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub external_race_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_type: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub next_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub next_end_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Address {
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zipcode: String,
}

// ============================================================================
// Detail query: GET /race/{race_id}
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct RaceDetailResponse {
    pub race: RaceDetailRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceDetailRecord {
    #[serde(deserialize_with = "provider_id")]
    pub race_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub external_race_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timezone: String,
    #[serde(default)]
    pub events: Option<Vec<RaceEventRecord>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceEventRecord {
    #[serde(deserialize_with = "provider_id")]
    pub event_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_opens: String,
    #[serde(default)]
    pub registration_periods: Option<Vec<RegistrationPeriodRecord>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RegistrationPeriodRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_opens: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_closes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub race_fee: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub processing_fee: String,
}

// ============================================================================
// Error envelope
// ============================================================================

/// Error body RunSignup sends instead of the expected payload.
#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorEnvelope {
    pub error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorBody {
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    error_msg: String,
}

impl fmt::Display for ProviderErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "{} (code {})", self.error_msg, code),
            None => f.write_str(&self.error_msg),
        }
    }
}

// ============================================================================
// Field deserializers
// ============================================================================

/// Text that may arrive as a string, a number, a bool, or `null`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected text, found {}",
            json_kind(&other)
        ))),
    }
}

/// Identifier sent either as a JSON integer or a numeric string.
fn provider_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("invalid identifier: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid identifier: {:?}", s))),
        other => Err(D::Error::custom(format!(
            "expected identifier, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
