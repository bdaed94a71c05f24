use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, category, brand, model, attributes, tags";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE lower(name) = lower($1) LIMIT 1",
            PRODUCT_COLUMNS
        ))
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let patterns: Vec<String> = name
            .trim()
            .split_whitespace()
            .map(|word| format!("%{}%", word))
            .collect();
        if patterns.is_empty() {
            return Ok(vec![]);
        }

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE name ILIKE ALL($1) ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .bind(&patterns)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
