//! Body-type selector - picks the catalog body style for a door count.

use crate::models::{BodyStyleId, CanonicalBodyType, DoorCount};

use super::patterns::numeric_door_pattern;

/// Select the canonical body style that matches an inferred door count.
///
/// An entry matches when its `desc` and `abbrev` mention the door count
/// ("4 Door Sedan", "2dr") or when its abbreviation starts with `2d`/`4d`.
/// The first matching entry in catalog order wins.
///
/// Returns `None` when the door count is unknown, the catalog is empty, or
/// no entry matches.
pub fn select_body_type(
    body_types: &[CanonicalBodyType],
    doors: Option<DoorCount>,
) -> Option<BodyStyleId> {
    let doors = doors?;
    let pattern = numeric_door_pattern(doors);
    let prefix = doors.abbrev_prefix();

    body_types
        .iter()
        .find(|body| {
            let text = format!("{} {}", body.desc, body.abbrev);
            pattern.is_match(&text) || body.abbrev.to_lowercase().starts_with(prefix)
        })
        .map(|body| body.body_style_id)
}
