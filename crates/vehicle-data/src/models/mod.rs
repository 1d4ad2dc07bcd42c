//! Vehicle data models
//!
//! This module contains the transient value types used by a single resolution:
//! - `types` - Type aliases for common identifiers (BodyStyleId)
//! - `vin` - Decoded VIN payload (VinDecodeResult) and the door-count hints it carries
//! - `body_type` - Canonical body style entries (CanonicalBodyType) and DoorCount
//! - `resolution` - Resolver outputs (ResolutionResult, VehicleLookup)

mod body_type;
mod resolution;
mod types;
mod vin;

pub use body_type::{CanonicalBodyType, DoorCount};
pub use resolution::{ResolutionResult, VehicleLookup};
pub use types::BodyStyleId;
pub use vin::{BodyHints, VinDecodeResult};
