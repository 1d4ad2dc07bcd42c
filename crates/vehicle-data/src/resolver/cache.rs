//! Lookup cache for catalog responses.
//!
//! A `LookupCache` is an explicit object owned by whoever builds the resolver
//! (typically one per UI session or per batch). It is keyed by the composite
//! lookup parameters and only ever stores successful responses.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::models::CanonicalBodyType;

/// Key for a model list: (year, lowercased make).
type ModelsKey = (String, String);

/// Key for a body-type list: (year, lowercased make, lowercased model).
type BodyTypesKey = (String, String, String);

/// In-memory cache of catalog lookups.
///
/// Thread-safe; locks are held only for the duration of a map access and
/// never across an await point.
#[derive(Debug, Default)]
pub struct LookupCache {
    models: RwLock<HashMap<ModelsKey, Vec<String>>>,
    body_types: RwLock<HashMap<BodyTypesKey, Vec<CanonicalBodyType>>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn models_key(year: &str, make: &str) -> ModelsKey {
        (year.trim().to_string(), make.trim().to_lowercase())
    }

    fn body_types_key(year: &str, make: &str, model: &str) -> BodyTypesKey {
        (
            year.trim().to_string(),
            make.trim().to_lowercase(),
            model.trim().to_lowercase(),
        )
    }

    /// Cached model list for `(year, make)`.
    pub fn get_models(&self, year: &str, make: &str) -> Option<Vec<String>> {
        read(&self.models)
            .get(&Self::models_key(year, make))
            .cloned()
    }

    /// Store a model list for `(year, make)`.
    pub fn put_models(&self, year: &str, make: &str, models: Vec<String>) {
        debug!("Caching {} models for {} {}", models.len(), year, make);
        write(&self.models).insert(Self::models_key(year, make), models);
    }

    /// Cached body types for `(year, make, model)`.
    pub fn get_body_types(&self, year: &str, make: &str, model: &str) -> Option<Vec<CanonicalBodyType>> {
        read(&self.body_types)
            .get(&Self::body_types_key(year, make, model))
            .cloned()
    }

    /// Store body types for `(year, make, model)`.
    pub fn put_body_types(&self, year: &str, make: &str, model: &str, body_types: Vec<CanonicalBodyType>) {
        write(&self.body_types).insert(Self::body_types_key(year, make, model), body_types);
    }

    /// Total number of cached entries across both maps.
    pub fn len(&self) -> usize {
        read(&self.models).len() + read(&self.body_types).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        write(&self.models).clear();
        write(&self.body_types).clear();
    }
}

/// Read-lock a cache map, recovering from poison if necessary.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        warn!("Lookup cache lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Write-lock a cache map, recovering from poison if necessary.
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        warn!("Lookup cache lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_roundtrip_is_case_insensitive_on_make() {
        let cache = LookupCache::new();
        cache.put_models("2019", "Nissan", vec!["Frontier Pickup".to_string()]);

        assert_eq!(
            cache.get_models("2019", "NISSAN"),
            Some(vec!["Frontier Pickup".to_string()])
        );
        assert_eq!(cache.get_models("2020", "Nissan"), None);
    }

    #[test]
    fn test_body_types_keyed_by_model() {
        let cache = LookupCache::new();
        let body_types = vec![CanonicalBodyType::new(12, "4D PK", "Crew Cab Pickup")];
        cache.put_body_types("2019", "Nissan", "Frontier Pickup", body_types.clone());

        assert_eq!(
            cache.get_body_types("2019", "nissan", "frontier pickup"),
            Some(body_types)
        );
        assert_eq!(cache.get_body_types("2019", "Nissan", "Titan"), None);
    }

    #[test]
    fn test_len_and_clear() {
        let cache = LookupCache::new();
        assert!(cache.is_empty());

        cache.put_models("2019", "Nissan", Vec::new());
        cache.put_body_types("2019", "Nissan", "Titan", Vec::new());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
