use std::fmt;

use super::RaceDataError;

/// A single failed request of a fan-out, recorded against its event type.
#[derive(Debug)]
pub struct CategoryFailure {
    /// The taxonomy token the failed request was issued for.
    pub event_type: String,
    /// Why the request failed.
    pub error: RaceDataError,
}

impl fmt::Display for CategoryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event_type, self.error)
    }
}

/// The per-category failures of one fan-out, merged into a single error.
///
/// Never empty when returned by the fetcher. Failures are sorted by event
/// type so the message is stable regardless of completion order.
#[derive(Debug, Default)]
pub struct AggregateFetchError {
    failures: Vec<CategoryFailure>,
}

impl AggregateFetchError {
    pub fn new(mut failures: Vec<CategoryFailure>) -> Self {
        failures.sort_by(|a, b| a.event_type.cmp(&b.event_type));
        Self { failures }
    }

    pub fn failures(&self) -> &[CategoryFailure] {
        &self.failures
    }

    /// Event types whose request failed, in sorted order.
    pub fn failed_event_types(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.event_type.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for AggregateFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "some event types failed to fetch: ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateFetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(event_type: &str, status: u16) -> CategoryFailure {
        CategoryFailure {
            event_type: event_type.to_string(),
            error: RaceDataError::Status {
                provider: "RUNSIGNUP".to_string(),
                status,
                body: "API Error".to_string(),
            },
        }
    }

    #[test]
    fn test_failures_sorted_by_event_type() {
        let error = AggregateFetchError::new(vec![failure("swim", 500), failure("duathlon", 502)]);
        assert_eq!(error.failed_event_types(), vec!["duathlon", "swim"]);
        assert_eq!(error.len(), 2);
    }

    #[test]
    fn test_display_names_every_failure() {
        let error = AggregateFetchError::new(vec![failure("ultra", 500), failure("swim", 503)]);
        let message = error.to_string();
        assert!(message.starts_with("some event types failed to fetch: "));
        assert!(message.contains("swim: API error from RUNSIGNUP: status 503"));
        assert!(message.contains("ultra: API error from RUNSIGNUP: status 500"));
    }
}
