use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::SelectionError;
use super::model::CandidatePool;

/// Selector capability: turns a candidate pool into an ordered list of
/// recommended product ids. Implemented by the AI-backed selector and by the
/// deterministic fallback, so the orchestrator's control flow is identical
/// whichever one is active.
#[async_trait]
pub trait SelectorService: Send + Sync {
    async fn select(
        &self,
        primary: &Product,
        pool: &CandidatePool,
        limit: usize,
    ) -> Result<Vec<i64>, SelectionError>;
}
