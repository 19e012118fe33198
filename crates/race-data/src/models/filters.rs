//! Filters for a race list query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar window applied to a race's next occurrence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Event distance bounds, in the provider's distance unit (miles).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Filters for [`crate::EventFetcher::fetch_events`].
///
/// `state` is the location filter and is required; everything else narrows
/// the query further.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilters {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Restricts the fan-out to a single taxonomy token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_range: Option<DistanceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Search radius around `zipcode`, in miles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

impl EventFilters {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            ..Default::default()
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_range = Some(DateRange { start, end });
        self
    }

    pub fn with_distance_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.distance_range = Some(DistanceRange { min, max });
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>, radius: Option<u32>) -> Self {
        self.zipcode = Some(zipcode.into());
        self.radius = radius;
        self
    }

    /// Query parameters for one upstream list request, excluding credentials.
    ///
    /// `event_type` is the token of the fan-out task issuing the request, not
    /// the caller's filter. Empty optional values are left out.
    pub fn query_params(&self, event_type: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("state", self.state.trim().to_string())];

        if !event_type.is_empty() {
            params.push(("event_type", event_type.to_string()));
        }
        push_text(&mut params, "city", self.city.as_deref());

        if let Some(range) = &self.date_range {
            if let Some(start) = range.start {
                params.push(("start_date", start.format("%Y-%m-%d").to_string()));
            }
            if let Some(end) = range.end {
                params.push(("end_date", end.format("%Y-%m-%d").to_string()));
            }
        }
        if let Some(range) = &self.distance_range {
            if let Some(min) = range.min {
                params.push(("min_distance", min.to_string()));
            }
            if let Some(max) = range.max {
                params.push(("max_distance", max.to_string()));
            }
        }

        push_text(&mut params, "zipcode", self.zipcode.as_deref());
        if let Some(radius) = self.radius {
            params.push(("radius", radius.to_string()));
        }

        params
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_minimal() {
        let filters = EventFilters::new("NY");
        assert_eq!(
            filters.query_params("swim"),
            vec![("state", "NY".to_string()), ("event_type", "swim".to_string())]
        );
    }

    #[test]
    fn test_query_params_all_filters() {
        let filters = EventFilters::new("NY")
            .with_city("New York")
            .with_date_range(
                NaiveDate::from_ymd_opt(2025, 1, 1),
                NaiveDate::from_ymd_opt(2025, 12, 31),
            )
            .with_distance_range(Some(3.1), Some(26.2))
            .with_zipcode("10001", Some(25));

        let params = filters.query_params("running_race");
        assert!(params.contains(&("city", "New York".to_string())));
        assert!(params.contains(&("start_date", "2025-01-01".to_string())));
        assert!(params.contains(&("end_date", "2025-12-31".to_string())));
        assert!(params.contains(&("min_distance", "3.1".to_string())));
        assert!(params.contains(&("max_distance", "26.2".to_string())));
        assert!(params.contains(&("zipcode", "10001".to_string())));
        assert!(params.contains(&("radius", "25".to_string())));
        assert!(params.contains(&("event_type", "running_race".to_string())));
    }

    #[test]
    fn test_blank_optional_text_is_skipped() {
        let filters = EventFilters::new("CA").with_city("  ");
        let params = filters.query_params("ultra");
        assert!(!params.iter().any(|(key, _)| *key == "city"));
    }
}
