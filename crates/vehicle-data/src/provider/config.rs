//! Client configuration.
//!
//! The only external contract is the catalog service base URL; every endpoint
//! path is joined onto it. A request timeout is applied to the HTTP client.

use std::time::Duration;

use url::Url;

use crate::errors::VehicleDataError;

/// Environment variable holding the catalog service base URL.
pub const BASE_URL_ENV: &str = "AUTOGLASS_API_BASE_URL";

/// Environment variable holding the request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "AUTOGLASS_API_TIMEOUT_SECS";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the catalog service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, always ending in `/` so relative endpoint paths append to it.
    pub base_url: Url,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, VehicleDataError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, VehicleDataError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// `AUTOGLASS_API_BASE_URL` is required; `AUTOGLASS_API_TIMEOUT_SECS`
    /// is optional and must be a positive integer when present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VehicleDataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| VehicleDataError::Config(format!("{} is not set", BASE_URL_ENV)))?;

        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            config.request_timeout = parse_timeout_secs(&raw)?;
        }

        Ok(config)
    }

    /// Resolve a relative endpoint path (e.g. `agp/v1/vin`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, VehicleDataError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Parse a timeout given in whole seconds. Zero is rejected.
pub(crate) fn parse_timeout_secs(raw: &str) -> Result<Duration, VehicleDataError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(VehicleDataError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            TIMEOUT_ENV, raw
        ))),
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, VehicleDataError> {
    let mut url = Url::parse(raw.trim())?;

    if url.cannot_be_a_base() {
        return Err(VehicleDataError::Config(format!(
            "base URL '{}' cannot have paths joined onto it",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
