use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub attributes: Value,
    pub tags: Vec<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let attributes = match self.attributes {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Product::from_repository(
            self.id,
            self.name,
            self.category,
            self.brand,
            self.model,
            attributes,
            self.tags,
        )
    }
}

/// Record shape of a flat-file catalog entry. Brand, model, attributes, and
/// tags may all be absent in hand-maintained files.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductRecord {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.category,
            self.brand,
            self.model,
            self.attributes,
            self.tags,
        )
    }
}
