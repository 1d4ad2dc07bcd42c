//! Decoded VIN payload.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw vehicle attributes returned by the VIN decode service.
///
/// Fields are kept exactly as the decoder returned them, apart from `year`
/// which is normalized to a string because the service sends it either as a
/// JSON number or a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinDecodeResult {
    /// Model year (e.g., "2019")
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<String>,

    /// Manufacturer name (e.g., "Nissan")
    #[serde(default)]
    pub make: Option<String>,

    /// Vendor model name (e.g., "Frontier")
    #[serde(default)]
    pub model: Option<String>,

    /// Body description (e.g., "Crew Cab Pickup")
    #[serde(default)]
    pub body_type: Option<String>,

    /// Vehicle class (e.g., "TRUCK")
    #[serde(default)]
    pub vehicle_type: Option<String>,

    /// The VIN that was decoded
    #[serde(default)]
    pub vin: String,
}

impl VinDecodeResult {
    /// Borrow the text fields the door-count extractor scans.
    pub fn body_hints(&self) -> BodyHints<'_> {
        BodyHints {
            body_type: self.body_type.as_deref(),
            model: self.model.as_deref(),
            vehicle_type: self.vehicle_type.as_deref(),
        }
    }
}

/// Text fields scanned for a door count, in scan order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyHints<'a> {
    pub body_type: Option<&'a str>,
    pub model: Option<&'a str>,
    pub vehicle_type: Option<&'a str>,
}

impl<'a> BodyHints<'a> {
    pub fn with_body_type(mut self, body_type: &'a str) -> Self {
        self.body_type = Some(body_type);
        self
    }

    pub fn with_model(mut self, model: &'a str) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: &'a str) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    /// Fields in scan order: body type, model, vehicle type.
    pub(crate) fn fields(&self) -> [Option<&'a str>; 3] {
        [self.body_type, self.model, self.vehicle_type]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = Option::<YearRepr>::deserialize(deserializer)?;
    Ok(year
        .map(|repr| match repr {
            YearRepr::Number(n) => n.to_string(),
            YearRepr::Text(s) => s.trim().to_string(),
        })
        .filter(|s| !s.is_empty()))
}
