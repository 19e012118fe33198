//! Race data provider abstractions and implementations.
//!
//! This module contains:
//! - The `RaceDataProvider` trait that all providers implement
//! - The RunSignup provider and its configuration
//!
//! Providers perform exactly one upstream request per call. Fanning a query
//! out across event types is the job of [`crate::fetcher::EventFetcher`].

mod traits;

pub mod runsignup;

pub use traits::RaceDataProvider;
