use std::fmt;
use std::time::Duration;

use log::warn;

/// Default RunSignup REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://runsignup.com/Rest";

/// Upper bound for a single upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the RunSignup API.
#[derive(Clone)]
pub struct RunSignupConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub request_timeout: Duration,
}

impl RunSignupConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load settings from the environment, reading a `.env` file first if
    /// one exists.
    ///
    /// - `RUNSIGNUP_API_URL` (default [`DEFAULT_BASE_URL`])
    /// - `RUNSIGNUP_API_KEY`
    /// - `RUNSIGNUP_API_SECRET`
    /// - `RUNSIGNUP_TIMEOUT_SECS` (default 10)
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            log::debug!("No .env file found, using process environment");
        }

        let timeout = match std::env::var("RUNSIGNUP_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid RUNSIGNUP_TIMEOUT_SECS={:?}, using {:?}",
                        raw, DEFAULT_REQUEST_TIMEOUT
                    );
                    DEFAULT_REQUEST_TIMEOUT
                }
            },
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        let api_key = std::env::var("RUNSIGNUP_API_KEY").unwrap_or_default();
        let api_secret = std::env::var("RUNSIGNUP_API_SECRET").unwrap_or_default();
        if api_key.is_empty() || api_secret.is_empty() {
            warn!("RUNSIGNUP_API_KEY or RUNSIGNUP_API_SECRET is not set");
        }

        Self {
            base_url: std::env::var("RUNSIGNUP_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            api_secret,
            request_timeout: timeout,
        }
    }
}

impl fmt::Debug for RunSignupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSignupConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &redact(&self.api_secret))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
