//! Canonical body style entries and door-count classification.

use serde::{Deserialize, Serialize};

use super::types::BodyStyleId;

/// A body style as recognized by the shop's glass catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalBodyType {
    /// Catalog identifier (e.g., 3)
    pub body_style_id: BodyStyleId,

    /// Short code (e.g., "4D SED", "2D CPE")
    #[serde(default)]
    pub abbrev: String,

    /// Human-readable description (e.g., "4 Door Sedan")
    #[serde(default)]
    pub desc: String,
}

impl CanonicalBodyType {
    pub fn new(body_style_id: BodyStyleId, abbrev: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            body_style_id,
            abbrev: abbrev.into(),
            desc: desc.into(),
        }
    }
}

/// Door count inferred from decoded body or model text.
///
/// "Unknown" is expressed as `Option::<DoorCount>::None` by the extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorCount {
    Two,
    Four,
}

impl DoorCount {
    /// Number of doors as an integer.
    pub fn count(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Abbreviation prefix used by the catalog for this door count ("2d" / "4d").
    pub(crate) fn abbrev_prefix(self) -> &'static str {
        match self {
            Self::Two => "2d",
            Self::Four => "4d",
        }
    }
}

impl std::fmt::Display for DoorCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-door", self.count())
    }
}
