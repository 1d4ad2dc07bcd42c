//! Error types for the vehicle data crate.
//!
//! This module provides [`VehicleDataError`], the error enum returned by the
//! catalog clients and the full VIN lookup pipeline. Model resolution never
//! surfaces these errors to its callers; it logs them and falls back to the
//! raw decoded value instead.

use thiserror::Error;

/// Errors that can occur while talking to the vehicle catalog services.
///
/// Transport-level failures are grouped under "upstream unavailable" by
/// [`is_upstream_unavailable`](Self::is_upstream_unavailable). That is the
/// only failure kind the resolver distinguishes.
#[derive(Error, Debug)]
pub enum VehicleDataError {
    /// The VIN is not 17 characters drawn from the VIN alphabet.
    #[error("Invalid VIN: {0}")]
    InvalidVin(String),

    /// The request to the service timed out.
    #[error("Timeout: {service}")]
    Timeout {
        /// The service that timed out
        service: String,
    },

    /// The service answered with a non-2xx status.
    /// The response body is not inspected.
    #[error("Upstream {service} returned HTTP {status}")]
    UpstreamStatus {
        /// The service that returned the status
        service: String,
        /// The HTTP status code
        status: u16,
    },

    /// The service answered 2xx but the body could not be decoded.
    #[error("Malformed response from {service}: {message}")]
    MalformedResponse {
        /// The service that returned the body
        service: String,
        /// Decoder error message
        message: String,
    },

    /// A network error occurred while communicating with a service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured base URL could not be parsed or joined.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Client configuration is unusable (bad timeout, empty base URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VehicleDataError {
    /// Returns true when the error means the upstream service could not be
    /// used: network failure, timeout, non-2xx status or malformed JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoglass_vehicle_data::errors::VehicleDataError;
    ///
    /// let error = VehicleDataError::UpstreamStatus { service: "AGP".to_string(), status: 503 };
    /// assert!(error.is_upstream_unavailable());
    ///
    /// let error = VehicleDataError::InvalidVin("123".to_string());
    /// assert!(!error.is_upstream_unavailable());
    /// ```
    pub fn is_upstream_unavailable(&self) -> bool {
        match self {
            Self::Timeout { .. }
            | Self::UpstreamStatus { .. }
            | Self::MalformedResponse { .. }
            | Self::Network(_) => true,

            // Caller or configuration mistakes
            Self::InvalidVin(_) | Self::InvalidBaseUrl(_) | Self::Config(_) => false,
        }
    }
}
