use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Doctor {
    /// Experience in years when the backend reports it as a number or numeric
    /// string.
    #[must_use]
    pub fn experience_years(&self) -> Option<u32> {
        match self.profile.get("experience")? {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}
