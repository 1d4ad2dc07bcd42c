//! Autoglass Vehicle Data Crate
//!
//! This crate resolves VIN-decoded vehicles against an auto-glass shop's
//! canonical catalog.
//!
//! # Overview
//!
//! The vehicle data crate supports:
//! - VIN validation and decoding through the catalog service
//! - Fuzzy matching of vendor model names onto canonical model names
//! - Door-count inference and automatic body style selection
//! - Best-effort resolution that falls back to raw decoded values
//! - An optional, explicitly owned lookup cache
//!
//! # Core Types
//!
//! - [`VehicleResolver`] - Orchestrates decode, catalog lookups and matching
//! - [`VinDecodeResult`] - Raw decode payload
//! - [`ResolutionResult`] - Canonical model resolution with a match flag
//! - [`VehicleLookup`] - Everything the full VIN lookup learned
//! - [`CanonicalBodyType`] / [`DoorCount`] - Body style data
//! - [`AgpClient`] - HTTP client for the catalog service

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::VehicleDataError;

// Re-export all public types from models
pub use models::{
    BodyHints, BodyStyleId, CanonicalBodyType, DoorCount, ResolutionResult, VehicleLookup,
    VinDecodeResult,
};

// Re-export provider types
pub use provider::agp::AgpClient;
pub use provider::{BodyTypeCatalog, ClientConfig, ModelCatalog, VinDecoder};

// Re-export resolver types
pub use resolver::{
    extract_door_count, match_model, match_model_with_strategy, select_body_type, validate_vin,
    LookupCache, MatchStrategy, VehicleResolver,
};
