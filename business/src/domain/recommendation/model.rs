use std::collections::HashSet;

use crate::domain::product::model::Product;

/// The bounded set of catalog products eligible for recommendation, scoped
/// to one request. Insertion order is preserved and ids are unique.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    products: Vec<Product>,
    ids: HashSet<i64>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product unless its id is already present. Returns whether it
    /// was inserted.
    pub fn push(&mut self, product: Product) -> bool {
        if !self.ids.insert(product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Final artifact of the recommendation pipeline. The recommended products
/// always come from the candidate pool built for the same request.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub primary_item: Option<Product>,
    pub recommendations: Vec<Product>,
}

impl Recommendation {
    /// Result for a query that matched no catalog product. Not an error.
    pub fn empty() -> Self {
        Self {
            primary_item: None,
            recommendations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn product(id: i64) -> Product {
        Product::from_repository(
            id,
            format!("Product {}", id),
            "charger".to_string(),
            None,
            None,
            Map::new(),
            vec![],
        )
    }

    #[test]
    fn should_keep_first_seen_order_and_drop_duplicate_ids() {
        let mut pool = CandidatePool::new();
        assert!(pool.push(product(2)));
        assert!(pool.push(product(1)));
        assert!(!pool.push(product(2)));

        let ids: Vec<i64> = pool.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn should_resolve_members_by_id() {
        let mut pool = CandidatePool::new();
        pool.push(product(7));

        assert!(pool.contains(7));
        assert_eq!(pool.get(7).map(|p| p.id), Some(7));
        assert!(!pool.contains(8));
        assert!(pool.get(8).is_none());
    }
}
