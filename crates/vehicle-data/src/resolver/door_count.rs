//! Door-count extractor.
//!
//! Infers 2 or 4 doors from free-form decoder text. Numeric door mentions are
//! tried before truck cab keywords, and fields are scanned body type first,
//! then model, then vehicle type.

use crate::models::{BodyHints, DoorCount};

use super::patterns::door_rules;

/// Infer the door count from decoded vehicle text.
///
/// Returns `None` when no field mentions a recognizable door count; callers
/// should then skip automatic body-type selection.
///
/// # Examples
///
/// ```
/// use autoglass_vehicle_data::models::{BodyHints, DoorCount};
/// use autoglass_vehicle_data::resolver::extract_door_count;
///
/// let hints = BodyHints::default().with_body_type("4 Door Sedan");
/// assert_eq!(extract_door_count(&hints), Some(DoorCount::Four));
/// assert_eq!(extract_door_count(&BodyHints::default()), None);
/// ```
pub fn extract_door_count(hints: &BodyHints<'_>) -> Option<DoorCount> {
    hints
        .fields()
        .into_iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .find_map(classify_text)
}

/// Classify a single text field.
fn classify_text(text: &str) -> Option<DoorCount> {
    door_rules()
        .into_iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, doors)| doors)
}
