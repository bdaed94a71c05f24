use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only query port over the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Exact name match, case-insensitive.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;

    /// Partial name match, case-insensitive: every word of `name` must
    /// appear in the product name. Results keep catalog order.
    async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
