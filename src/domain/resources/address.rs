use serde::{Deserialize, Serialize};

/// Postal address attached to customers and payment methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "line_1", default)]
    pub line1: String,
    #[serde(rename = "line_2", default)]
    pub line2: String,
    #[serde(rename = "line_3", default)]
    pub line3: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip: String,
    #[serde(rename = "phone_number", default)]
    pub phone: String,
}
