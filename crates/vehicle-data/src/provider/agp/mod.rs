//! AGP catalog service client.
//!
//! This module talks to the shop's glass catalog API:
//! - VIN decoding via `agp/v1/vin`
//! - Canonical model names via `agp/v1/model-lookup?year&make`
//! - Canonical body styles via `agp/v1/model-lookup?year&make&model&body_style_id`
//!
//! Any non-2xx status is a failure; error bodies are not inspected.

mod models;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::VehicleDataError;
use crate::models::{CanonicalBodyType, VinDecodeResult};
use crate::provider::{BodyTypeCatalog, ClientConfig, ModelCatalog, VinDecoder};

use models::{BodyTypeLookupResponse, ModelLookupResponse};

const SERVICE_ID: &str = "AGP";
const VIN_PATH: &str = "agp/v1/vin";
const MODEL_LOOKUP_PATH: &str = "agp/v1/model-lookup";

/// HTTP client for the AGP catalog service.
///
/// # Example
///
/// ```ignore
/// use autoglass_vehicle_data::provider::{agp::AgpClient, ClientConfig};
///
/// let client = AgpClient::new(ClientConfig::new("https://api.example.com/")?);
/// let decoded = client.decode_vin("1N6AD0EV5KN700000").await?;
/// ```
pub struct AgpClient {
    client: Client,
    config: ClientConfig,
}

impl AgpClient {
    /// Create a new client from connection settings.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn vin_url(&self, vin: &str) -> Result<Url, VehicleDataError> {
        let mut url = self.config.endpoint(VIN_PATH)?;
        url.query_pairs_mut().append_pair("vin", vin);
        Ok(url)
    }

    fn models_url(&self, year: &str, make: &str) -> Result<Url, VehicleDataError> {
        let mut url = self.config.endpoint(MODEL_LOOKUP_PATH)?;
        url.query_pairs_mut()
            .append_pair("year", year)
            .append_pair("make", make);
        Ok(url)
    }

    fn body_types_url(&self, year: &str, make: &str, model: &str) -> Result<Url, VehicleDataError> {
        let mut url = self.config.endpoint(MODEL_LOOKUP_PATH)?;
        url.query_pairs_mut()
            .append_pair("year", year)
            .append_pair("make", make)
            .append_pair("model", model)
            .append_key_only("body_style_id");
        Ok(url)
    }

    /// GET a URL and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, VehicleDataError> {
        debug!("{} request: {}", SERVICE_ID, url.path());

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                VehicleDataError::Timeout {
                    service: SERVICE_ID.to_string(),
                }
            } else {
                VehicleDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VehicleDataError::UpstreamStatus {
                service: SERVICE_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| VehicleDataError::MalformedResponse {
            service: SERVICE_ID.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl VinDecoder for AgpClient {
    async fn decode_vin(&self, vin: &str) -> Result<VinDecodeResult, VehicleDataError> {
        let url = self.vin_url(vin)?;
        let mut decoded: VinDecodeResult = self.get_json(url).await?;

        if decoded.vin.is_empty() {
            decoded.vin = vin.to_string();
        }

        Ok(decoded)
    }
}

#[async_trait]
impl ModelCatalog for AgpClient {
    async fn fetch_models(&self, year: &str, make: &str) -> Result<Vec<String>, VehicleDataError> {
        let url = self.models_url(year, make)?;
        let response: ModelLookupResponse = self.get_json(url).await?;
        Ok(response.models)
    }
}

#[async_trait]
impl BodyTypeCatalog for AgpClient {
    async fn fetch_body_types(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<Vec<CanonicalBodyType>, VehicleDataError> {
        let url = self.body_types_url(year, make, model)?;
        let response: BodyTypeLookupResponse = self.get_json(url).await?;
        Ok(response.body_types)
    }
}
