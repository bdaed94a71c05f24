use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::recommendation::model::Recommendation;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecommendationRequest {
    /// Name of the product to look up (exact match first, then partial)
    pub item_name: String,
    /// Maximum number of recommendations to return (default: 5)
    #[oai(validator(minimum(value = "1")))]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductView {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Brand, if known
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Model, if known
    #[oai(skip_serializing_if_is_none)]
    pub model: Option<String>,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            brand: p.brand,
            model: p.model,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecommendationResponse {
    /// The matched primary product; null when the query matched nothing
    pub primary_item: Option<ProductView>,
    /// Ordered recommendations, most relevant first
    pub recommendations: Vec<ProductView>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            primary_item: r.primary_item.map(ProductView::from),
            recommendations: r
                .recommendations
                .into_iter()
                .map(ProductView::from)
                .collect(),
        }
    }
}
