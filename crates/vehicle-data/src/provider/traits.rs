//! Catalog client trait definitions.

use async_trait::async_trait;

use crate::errors::VehicleDataError;
use crate::models::{CanonicalBodyType, VinDecodeResult};

/// Decodes a VIN into raw vehicle attributes.
#[async_trait]
pub trait VinDecoder: Send + Sync {
    /// Decode a VIN.
    ///
    /// The VIN is passed through as given; validation is the caller's concern.
    async fn decode_vin(&self, vin: &str) -> Result<VinDecodeResult, VehicleDataError>;
}

/// Looks up the shop's canonical model names for a year and make.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// Fetch the canonical model list for `(year, make)`.
    ///
    /// # Returns
    ///
    /// The models in catalog order. Order matters: the fuzzy matcher picks
    /// the first candidate that satisfies each strategy.
    async fn fetch_models(&self, year: &str, make: &str) -> Result<Vec<String>, VehicleDataError>;
}

/// Looks up canonical body styles for a year, make and model.
#[async_trait]
pub trait BodyTypeCatalog: Send + Sync {
    async fn fetch_body_types(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<Vec<CanonicalBodyType>, VehicleDataError>;
}
