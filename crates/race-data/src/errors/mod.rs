//! Error types for the race data crate.
//!
//! This module provides:
//! - [`RaceDataError`]: The main error enum for all race data operations
//! - [`AggregateFetchError`]: The merged per-category failures of a fan-out fetch

mod aggregate;

pub use aggregate::{AggregateFetchError, CategoryFailure};

use thiserror::Error;

/// Errors that can occur while fetching or normalizing race data.
#[derive(Error, Debug)]
pub enum RaceDataError {
    /// A filter or category supplied by the caller was rejected.
    /// Raised before any network call is issued.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The request never produced an HTTP response (connection failure,
    /// timeout, body read failure).
    #[error("Request to {provider} failed: {message}")]
    Request {
        /// The provider the request was sent to
        provider: String,
        /// Transport-level failure description
        message: String,
    },

    /// The provider answered with a non-2xx status.
    #[error("API error from {provider}: status {status} - response: {body}")]
    Status {
        /// The provider that returned the status
        provider: String,
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// One or more per-category requests of a fan-out failed.
    #[error(transparent)]
    Aggregate(#[from] AggregateFetchError),
}

impl RaceDataError {
    /// Whether the error was caused by caller input rather than the upstream.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for RaceDataError {
    fn from(err: serde_json::Error) -> Self {
        RaceDataError::Parse(err.to_string())
    }
}
