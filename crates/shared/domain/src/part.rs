use serde::{Deserialize, Deserializer, Serialize};

/// One catalog record as returned by the parts API.
///
/// Every field has a default so that a sparse record still decodes, and an explicit
/// `null` reads as that default. Unknown backend fields (`_id`, `compatibility`,
/// timestamps) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Part {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Units on hand. The backend stores a plain number, so fractions pass through.
    #[serde(deserialize_with = "null_as_default")]
    pub stock: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isSecondHand", deserialize_with = "null_as_default")]
    pub second_hand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Part {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self { name: name.into(), category: category.into(), price, ..Self::default() }
    }

    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = f64::from(stock);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text, treating an empty string the same as a missing one.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// JSON envelope of `GET {base_url}/parts`.
///
/// Decode with `T = serde_json::Value` to inspect records one at a time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartsEnvelope<T = Part> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
