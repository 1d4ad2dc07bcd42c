//! Door-count text patterns shared by the extractor and the body-type selector.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::DoorCount;

lazy_static! {
    /// "2 door", "2-door", "2dr", "two door"
    static ref TWO_DOOR_REGEX: Regex =
        Regex::new(r"(?i)\b(?:2|two)[\s-]?(?:doors?|dr)\b")
            .expect("Invalid regex pattern");

    /// "4 door", "4-door", "4dr", "four door"
    static ref FOUR_DOOR_REGEX: Regex =
        Regex::new(r"(?i)\b(?:4|four)[\s-]?(?:doors?|dr)\b")
            .expect("Invalid regex pattern");

    /// Truck cabs with two full doors
    static ref TWO_DOOR_CAB_REGEX: Regex =
        Regex::new(r"(?i)\b(?:extended|king|access)[\s-]?cab\b")
            .expect("Invalid regex pattern");

    /// Truck cabs with four full doors
    static ref FOUR_DOOR_CAB_REGEX: Regex =
        Regex::new(r"(?i)\b(?:crew|double|quad)[\s-]?cab\b")
            .expect("Invalid regex pattern");
}

/// Explicit numeric door pattern for a door count.
pub(crate) fn numeric_door_pattern(doors: DoorCount) -> &'static Regex {
    match doors {
        DoorCount::Two => &*TWO_DOOR_REGEX,
        DoorCount::Four => &*FOUR_DOOR_REGEX,
    }
}

/// Patterns tried against one text field, in order.
pub(crate) fn door_rules() -> [(&'static Regex, DoorCount); 4] {
    [
        (&*TWO_DOOR_REGEX, DoorCount::Two),
        (&*FOUR_DOOR_REGEX, DoorCount::Four),
        (&*TWO_DOOR_CAB_REGEX, DoorCount::Two),
        (&*FOUR_DOOR_CAB_REGEX, DoorCount::Four),
    ]
}
