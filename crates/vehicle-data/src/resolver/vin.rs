//! VIN validation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::VehicleDataError;

/// Length of a modern (post-1981) VIN
pub const VIN_LENGTH: usize = 17;

lazy_static! {
    /// Regex pattern for validating VINs
    /// Format: 17 characters, digits and letters except I, O and Q
    static ref VIN_REGEX: Regex =
        Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$")
            .expect("Invalid regex pattern");
}

/// Normalize and validate a VIN.
///
/// Surrounding whitespace is removed and letters are uppercased before the
/// check. Returns the normalized VIN.
pub fn validate_vin(vin: &str) -> Result<String, VehicleDataError> {
    let normalized = vin.trim().to_uppercase();

    if VIN_REGEX.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(VehicleDataError::InvalidVin(vin.to_string()))
    }
}
