//! AGP API response structures.

use serde::Deserialize;

use crate::models::CanonicalBodyType;

/// Response from `agp/v1/model-lookup?year&make`
#[derive(Debug, Deserialize)]
pub struct ModelLookupResponse {
    #[serde(default)]
    pub models: Vec<String>,
}

/// Response from `agp/v1/model-lookup?year&make&model&body_style_id`
#[derive(Debug, Deserialize)]
pub struct BodyTypeLookupResponse {
    #[serde(default)]
    pub body_types: Vec<CanonicalBodyType>,
}
