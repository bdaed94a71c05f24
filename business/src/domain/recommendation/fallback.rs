use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::SelectionError;
use super::model::CandidatePool;
use super::services::SelectorService;

/// Deterministic selection: the first `limit` pool entries in pool order.
/// Pure and total.
pub fn select_fallback(pool: &CandidatePool, limit: usize) -> Vec<i64> {
    pool.products().iter().take(limit).map(|p| p.id).collect()
}

/// Selector wired in place of the AI path when no credentials are
/// configured. Never fails.
pub struct FallbackSelector;

#[async_trait]
impl SelectorService for FallbackSelector {
    async fn select(
        &self,
        _primary: &Product,
        pool: &CandidatePool,
        limit: usize,
    ) -> Result<Vec<i64>, SelectionError> {
        Ok(select_fallback(pool, limit))
    }
}
