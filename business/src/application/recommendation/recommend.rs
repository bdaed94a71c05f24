use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::recommendation::candidates::build_candidates;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::fallback::select_fallback;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::services::SelectorService;
use crate::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};

pub struct RecommendUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub selector: Arc<dyn SelectorService>,
    pub logger: Arc<dyn Logger>,
}

impl RecommendUseCaseImpl {
    /// Exact match first, then the first partial match.
    async fn lookup(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        if let Some(product) = self.repository.find_by_name(name).await? {
            return Ok(Some(product));
        }
        let partial = self.repository.find_by_name_partial(name).await?;
        Ok(partial.into_iter().next())
    }
}

#[async_trait]
impl RecommendUseCase for RecommendUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendParams,
    ) -> Result<Recommendation, RecommendationError> {
        let Some(primary) = self.lookup(&params.item_name).await? else {
            self.logger
                .info(&format!("No catalog match for '{}'", params.item_name));
            return Ok(Recommendation::empty());
        };

        let catalog = self.repository.list_all().await?;
        let pool = build_candidates(&primary, &catalog, params.limit);
        if pool.is_empty() {
            self.logger
                .info(&format!("No candidates for product {}", primary.id));
            return Ok(Recommendation {
                primary_item: Some(primary),
                recommendations: Vec::new(),
            });
        }

        self.logger.debug(&format!(
            "Built {} candidates for product {}",
            pool.len(),
            primary.id
        ));

        let selected = match self.selector.select(&primary, &pool, params.limit).await {
            Ok(ids) => ids,
            Err(err) => {
                self.logger.warn(&format!(
                    "Selection failed ({}), using deterministic fallback",
                    err
                ));
                select_fallback(&pool, params.limit)
            }
        };

        // Ids resolve through the pool, so nothing outside it can surface.
        let recommendations: Vec<Product> = selected
            .into_iter()
            .filter_map(|id| pool.get(id).cloned())
            .take(params.limit)
            .collect();

        Ok(Recommendation {
            primary_item: Some(primary),
            recommendations,
        })
    }
}
