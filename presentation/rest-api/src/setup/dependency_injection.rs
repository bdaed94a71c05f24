use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::selector::AiSelector;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use persistence::product::json_repository::ProductRepositoryJsonFile;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::recommendation::recommend::RecommendUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::recommendation::fallback::FallbackSelector;
use business::domain::recommendation::services::SelectorService;

use crate::config::app_config::AppConfig;
use crate::config::data_config::DataSourceConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Catalog backend
        let repository: Arc<dyn ProductRepository> = match &config.data_source {
            DataSourceConfig::Postgres { url } => {
                let pool = create_postgres_pool(&DatabaseConfig::new(url.clone())).await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
            DataSourceConfig::JsonFile { path } => {
                Arc::new(ProductRepositoryJsonFile::load(path)?)
            }
        };

        // Selector: AI-backed when credentials are present, deterministic
        // otherwise. Logged once here, not per request.
        let selector: Arc<dyn SelectorService> = match &config.gemini.api_key {
            Some(api_key) => {
                let client = GeminiClient::new(api_key.clone());
                let models = vec![
                    config.gemini.model.clone(),
                    config.gemini.fallback_model.clone(),
                ];
                Arc::new(AiSelector::new(client, models))
            }
            None => {
                logger.warn(
                    "GEMINI_API_KEY not set, recommendations use deterministic selection",
                );
                Arc::new(FallbackSelector)
            }
        };

        let recommend_use_case = Arc::new(RecommendUseCaseImpl {
            repository,
            selector,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(
            config.data_source.label(),
            config.gemini.api_key.is_some(),
            config.gemini.model.clone(),
            config.gemini.fallback_model.clone(),
        );
        let recommendation_api =
            crate::api::recommendation::routes::RecommendationApi::new(recommend_use_case);

        Ok(Self {
            health_api,
            recommendation_api,
        })
    }
}
