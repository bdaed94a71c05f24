use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct RecommendParams {
    pub item_name: String,
    pub limit: usize,
}

#[async_trait]
pub trait RecommendUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendParams,
    ) -> Result<Recommendation, RecommendationError>;
}
