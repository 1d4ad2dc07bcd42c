//! Vehicle model resolution.
//!
//! This module turns a decoded VIN into the shop's canonical vehicle identity.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      VehicleResolver                         │
//! │                                                              │
//! │  VIN ──► validate_vin ──► VinDecoder ──► VinDecodeResult     │
//! │                                              │               │
//! │             ┌────────────────────────────────┤               │
//! │             ▼                                ▼               │
//! │  ModelCatalog (year, make)         extract_door_count        │
//! │             │                                │               │
//! │             ▼                                ▼               │
//! │  match_model ──► ResolutionResult   BodyTypeCatalog          │
//! │                                              │               │
//! │                                              ▼               │
//! │                                      select_body_type        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three matching functions are pure and usable on their own. The
//! resolver adds the network calls, the optional [`LookupCache`] and the
//! fallback policy: model resolution never fails, it degrades to the raw
//! decoded model.

mod body_style;
mod cache;
mod door_count;
mod model_matcher;
mod patterns;
mod vehicle_resolver;
mod vin;

pub use body_style::select_body_type;
pub use cache::LookupCache;
pub use door_count::extract_door_count;
pub use model_matcher::{match_model, match_model_with_strategy, MatchStrategy};
pub use vehicle_resolver::VehicleResolver;
pub use vin::{validate_vin, VIN_LENGTH};
