//! Vehicle resolver - orchestrates decode, catalog lookup and matching.
//!
//! The resolver is best-effort by construction: model resolution returns a
//! [`ResolutionResult`] rather than a `Result`, and every upstream failure is
//! logged and replaced by the raw decoded model. Only the full VIN lookup can
//! fail, and only before there is a raw value to fall back to (bad VIN or
//! failed decode).

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::VehicleDataError;
use crate::models::{CanonicalBodyType, ResolutionResult, VehicleLookup, VinDecodeResult};
use crate::provider::{BodyTypeCatalog, ModelCatalog, VinDecoder};

use super::body_style::select_body_type;
use super::cache::LookupCache;
use super::door_count::extract_door_count;
use super::model_matcher::match_model_with_strategy;
use super::vin::validate_vin;

/// Resolves decoded vehicles against the shop's canonical catalog.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(AgpClient::new(ClientConfig::from_env()?));
/// let resolver = VehicleResolver::from_client(client).with_cache(Arc::new(LookupCache::new()));
///
/// let result = resolver
///     .resolve_vin_model(Some("2019"), Some("Nissan"), Some("Frontier"))
///     .await;
/// // result.resolved_model = Some("Frontier Pickup"), result.match_found = true
/// ```
pub struct VehicleResolver {
    decoder: Arc<dyn VinDecoder>,
    model_catalog: Arc<dyn ModelCatalog>,
    body_type_catalog: Arc<dyn BodyTypeCatalog>,
    cache: Option<Arc<LookupCache>>,
}

impl VehicleResolver {
    /// Create a resolver from separate collaborators.
    pub fn new(
        decoder: Arc<dyn VinDecoder>,
        model_catalog: Arc<dyn ModelCatalog>,
        body_type_catalog: Arc<dyn BodyTypeCatalog>,
    ) -> Self {
        Self {
            decoder,
            model_catalog,
            body_type_catalog,
            cache: None,
        }
    }

    /// Create a resolver backed by one client implementing all three lookups.
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: VinDecoder + ModelCatalog + BodyTypeCatalog + 'static,
    {
        Self::new(client.clone(), client.clone(), client)
    }

    /// Attach a lookup cache. Without one, every call fetches fresh.
    pub fn with_cache(mut self, cache: Arc<LookupCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&Arc<LookupCache>> {
        self.cache.as_ref()
    }

    /// Resolve a decoded model name to the canonical catalog model.
    ///
    /// Steps:
    /// 1. Any input absent or empty -> fallback, no network call
    /// 2. Fetch canonical models for (year, make); failure -> fallback
    /// 3. Empty catalog -> fallback
    /// 4. Fuzzy match
    /// 5. Matched model, or the raw model when nothing matched
    ///
    /// The fallback is `{ resolved_model: vin_model, models: [], match_found: false }`.
    pub async fn resolve_vin_model(
        &self,
        year: Option<&str>,
        make: Option<&str>,
        vin_model: Option<&str>,
    ) -> ResolutionResult {
        let (Some(year), Some(make), Some(raw_model)) =
            (present(year), present(make), present(vin_model))
        else {
            debug!("Skipping model resolution: year, make or model missing");
            return ResolutionResult::fallback(vin_model);
        };

        let models = match self.load_models(year, make).await {
            Ok(models) => models,
            Err(e) => {
                warn!(
                    "Model lookup failed for {} {}, keeping '{}': {}",
                    year, make, raw_model, e
                );
                return ResolutionResult::fallback(vin_model);
            }
        };

        if models.is_empty() {
            debug!("No canonical models for {} {}", year, make);
            return ResolutionResult::fallback(vin_model);
        }

        let matched = match_model_with_strategy(raw_model, &models).map(|(model, strategy)| {
            debug!("Matched '{}' to '{}' ({:?})", raw_model, model, strategy);
            model.to_string()
        });

        if matched.is_none() {
            debug!(
                "No canonical match for '{}' among {} models",
                raw_model,
                models.len()
            );
        }

        ResolutionResult::from_catalog(matched.as_deref(), vin_model, models)
    }

    /// Resolve the model of a complete decode payload.
    ///
    /// A missing payload resolves to no model at all; a payload lacking year,
    /// make or model falls back to its raw model. Both follow the same rule as
    /// [`resolve_vin_model`](Self::resolve_vin_model): the raw model is
    /// returned exactly as given, or `None` when absent.
    pub async fn resolve_complete_vin_data(
        &self,
        decoded: Option<&VinDecodeResult>,
    ) -> ResolutionResult {
        let Some(decoded) = decoded else {
            debug!("No decode payload to resolve");
            return ResolutionResult::fallback(None);
        };

        let year = present(decoded.year.as_deref());
        let make = present(decoded.make.as_deref());
        let model = present(decoded.model.as_deref());

        if year.is_none() || make.is_none() || model.is_none() {
            debug!("Decode payload for '{}' is incomplete", decoded.vin);
            return ResolutionResult::fallback(decoded.model.as_deref());
        }

        self.resolve_vin_model(year, make, model).await
    }

    /// Run the full pipeline for one VIN.
    ///
    /// Validate -> decode -> resolve model -> extract door count -> fetch body
    /// types -> select body type. Validation and decode errors are returned;
    /// later steps degrade instead of failing.
    pub async fn lookup_vin(&self, vin: &str) -> Result<VehicleLookup, VehicleDataError> {
        let vin = validate_vin(vin)?;
        let decoded = self.decoder.decode_vin(&vin).await?;

        let resolution = self.resolve_complete_vin_data(Some(&decoded)).await;
        let door_count = extract_door_count(&decoded.body_hints());

        let body_types = match (
            door_count,
            present(decoded.year.as_deref()),
            present(decoded.make.as_deref()),
            present(resolution.resolved_model.as_deref()),
        ) {
            (Some(_), Some(year), Some(make), Some(model)) => {
                match self.load_body_types(year, make, model).await {
                    Ok(body_types) => body_types,
                    Err(e) => {
                        warn!("Body type lookup failed for {} {} {}: {}", year, make, model, e);
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        };

        let body_style_id = select_body_type(&body_types, door_count);

        info!(
            "Resolved VIN {}: model {:?} (match: {}), doors {:?}, body style {:?}",
            vin, resolution.resolved_model, resolution.match_found, door_count, body_style_id
        );

        Ok(VehicleLookup {
            decoded,
            resolution,
            door_count,
            body_types,
            body_style_id,
        })
    }

    async fn load_models(&self, year: &str, make: &str) -> Result<Vec<String>, VehicleDataError> {
        if let Some(models) = self.cache.as_ref().and_then(|c| c.get_models(year, make)) {
            debug!("Model cache hit for {} {}", year, make);
            return Ok(models);
        }

        let models = self.model_catalog.fetch_models(year, make).await?;

        if let Some(cache) = &self.cache {
            cache.put_models(year, make, models.clone());
        }

        Ok(models)
    }

    async fn load_body_types(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<Vec<CanonicalBodyType>, VehicleDataError> {
        if let Some(body_types) = self
            .cache
            .as_ref()
            .and_then(|c| c.get_body_types(year, make, model))
        {
            return Ok(body_types);
        }

        let body_types = self
            .body_type_catalog
            .fetch_body_types(year, make, model)
            .await?;

        if let Some(cache) = &self.cache {
            cache.put_body_types(year, make, model, body_types.clone());
        }

        Ok(body_types)
    }
}

/// Treat empty strings as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
