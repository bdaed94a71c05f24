use serde::Serialize;
use serde_json::{Map, Value};

/// A catalog product. Products are owned by the repository and only read by
/// the recommendation core; they never change within a request.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Open-schema attributes (`port_type`, `compatible_model`, ...).
    pub attributes: Map<String, Value>,
    pub tags: Vec<String>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        category: String,
        brand: Option<String>,
        model: Option<String>,
        attributes: Map<String, Value>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            brand,
            model,
            attributes,
            tags,
        }
    }

    /// String-valued attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
