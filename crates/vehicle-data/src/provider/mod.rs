//! Vehicle catalog client abstractions and implementations.
//!
//! This module contains:
//! - The `VinDecoder`, `ModelCatalog` and `BodyTypeCatalog` traits the resolver depends on
//! - Client configuration (base URL, request timeout)
//! - The AGP HTTP client that implements all three traits
//!
//! The resolver only ever sees the traits, so tests and alternative backends
//! can be swapped in without touching the matching logic.

mod config;
mod traits;

pub mod agp;

// Re-exports
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_REQUEST_TIMEOUT, TIMEOUT_ENV};
pub use traits::{BodyTypeCatalog, ModelCatalog, VinDecoder};
