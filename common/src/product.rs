use serde::{Deserialize, Serialize};

/// One catalog record, immutable once loaded. `object_id` is unique across
/// the loaded set and is the stable key for all downstream rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    /// Index 0 is the top-level category, index 1 the sub-category.
    /// Further indices are ignored for faceting but still searchable.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub free_shipping: bool,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub url: String,
}
