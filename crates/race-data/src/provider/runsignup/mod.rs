//! RunSignup race data provider implementation.
//!
//! - Race listings via the /races endpoint, one event type per request
//! - Race details via the /race/{race_id} endpoint
//!
//! Credentials travel as `api_key`/`api_secret` query parameters and are
//! never written to logs.
//! API documentation: https://runsignup.com/API

mod config;

pub use config::{RunSignupConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::RaceDataError;
use crate::models::{Event, EventFilters, RaceDetails, RaceId};
use crate::normalizer::{normalize_event_list, normalize_race_details};
use crate::provider::RaceDataProvider;

const PROVIDER_ID: &str = "RUNSIGNUP";

/// RunSignup race data provider.
pub struct RunSignupProvider {
    client: Client,
    config: RunSignupConfig,
}

impl RunSignupProvider {
    pub fn new(config: RunSignupConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Build a provider from `RUNSIGNUP_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(RunSignupConfig::from_env())
    }

    pub fn config(&self) -> &RunSignupConfig {
        &self.config
    }

    /// Make a GET request to the RunSignup API and return the raw body.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, RaceDataError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);

        let request = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("api_secret", self.config.api_secret.as_str()),
                ("format", "json"),
            ])
            .query(params)
            // Also bound per request in case the builder fell back to a default client.
            .timeout(self.config.request_timeout);

        debug!("RunSignup request: {} with {} params", endpoint, params.len());

        let response = request.send().await.map_err(|e| {
            // reqwest errors carry the full URL, which includes the credentials.
            let e = e.without_url();
            let message = if e.is_timeout() {
                format!(
                    "request timed out after {}s",
                    self.config.request_timeout.as_secs()
                )
            } else {
                format!("request failed: {}", e)
            };
            RaceDataError::Request {
                provider: PROVIDER_ID.to_string(),
                message,
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("RunSignup {} returned status {}", endpoint, status.as_u16());
            return Err(RaceDataError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|e| RaceDataError::Request {
            provider: PROVIDER_ID.to_string(),
            message: format!("failed to read response body: {}", e.without_url()),
        })
    }
}

#[async_trait]
impl RaceDataProvider for RunSignupProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_events(
        &self,
        filters: &EventFilters,
        event_type: &str,
    ) -> Result<Vec<Event>, RaceDataError> {
        if filters.state.trim().is_empty() {
            return Err(RaceDataError::Validation(
                "state parameter is required".to_string(),
            ));
        }

        let params = filters.query_params(event_type);
        let body = self.fetch("/races", &params).await?;
        let events = normalize_event_list(&body, event_type)?;

        debug!(
            "RunSignup returned {} races for event type '{}'",
            events.len(),
            event_type
        );
        Ok(events)
    }

    async fn fetch_race_details(&self, race_id: RaceId) -> Result<RaceDetails, RaceDataError> {
        if race_id <= 0 {
            return Err(RaceDataError::Validation(format!(
                "invalid race id: {}",
                race_id
            )));
        }

        let body = self.fetch(&format!("/race/{}", race_id), &[]).await?;
        normalize_race_details(&body)
    }
}
