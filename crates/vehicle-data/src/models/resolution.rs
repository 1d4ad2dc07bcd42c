//! Resolver outputs.

use serde::{Deserialize, Serialize};

use super::body_type::{CanonicalBodyType, DoorCount};
use super::types::BodyStyleId;
use super::vin::VinDecodeResult;

/// Outcome of resolving a decoded model name against the canonical catalog.
///
/// `resolved_model` holds the canonical match when one was found and the raw
/// decoded model otherwise. It is `None` only when no raw model was supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub resolved_model: Option<String>,
    pub models: Vec<String>,
    pub match_found: bool,
}

impl ResolutionResult {
    /// Fallback shape: raw model passed through, no catalog, no match.
    pub fn fallback(vin_model: Option<&str>) -> Self {
        Self {
            resolved_model: vin_model.map(str::to_string),
            models: Vec::new(),
            match_found: false,
        }
    }

    /// Build a result from a fetched catalog and the matcher's verdict.
    pub fn from_catalog(matched: Option<&str>, vin_model: Option<&str>, models: Vec<String>) -> Self {
        Self {
            resolved_model: matched.or(vin_model).map(str::to_string),
            match_found: matched.is_some(),
            models,
        }
    }
}

/// Everything the full VIN lookup learned about one vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLookup {
    /// Raw decode payload
    pub decoded: VinDecodeResult,

    /// Canonical model resolution
    pub resolution: ResolutionResult,

    /// Door count inferred from the decoded text, if any
    pub door_count: Option<DoorCount>,

    /// Canonical body types for the resolved model (empty when not fetched)
    pub body_types: Vec<CanonicalBodyType>,

    /// Auto-selected body style, if exactly determinable
    pub body_style_id: Option<BodyStyleId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_keeps_raw_model() {
        let result = ResolutionResult::fallback(Some("Frontier"));
        assert_eq!(result.resolved_model.as_deref(), Some("Frontier"));
        assert!(result.models.is_empty());
        assert!(!result.match_found);

        assert_eq!(ResolutionResult::fallback(None).resolved_model, None);
    }

    #[test]
    fn test_from_catalog_prefers_match() {
        let models = vec!["Frontier Pickup".to_string()];
        let result = ResolutionResult::from_catalog(Some("Frontier Pickup"), Some("Frontier"), models);
        assert_eq!(result.resolved_model.as_deref(), Some("Frontier Pickup"));
        assert!(result.match_found);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ResolutionResult::fallback(Some("Titan"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["resolvedModel"], "Titan");
        assert_eq!(json["matchFound"], false);
        assert!(json["models"].as_array().unwrap().is_empty());
    }
}
