use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{RecommendationRequest, RecommendationResponse};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendUseCase>,
}

impl RecommendationApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendUseCase>) -> Self {
        Self { recommend_use_case }
    }
}

/// Recommendation API
///
/// Endpoint for accessory/complement product recommendations.
#[OpenApi]
impl RecommendationApi {
    /// Recommend accessory products
    ///
    /// Looks up the queried product, builds a candidate pool with
    /// category-aware rules, and returns an ordered list of recommended
    /// products. An unknown product name yields an empty result, not an
    /// error; AI ranking failures fall back to deterministic selection.
    #[oai(path = "/recommendations", method = "post", tag = "ApiTags::Recommendations")]
    async fn recommend(&self, body: Json<RecommendationRequest>) -> PostRecommendationsResponse {
        let limit = body.0.limit.unwrap_or(5).min(10) as usize;
        let params = RecommendParams {
            item_name: body.0.item_name,
            limit,
        };

        match self.recommend_use_case.execute(params).await {
            Ok(recommendation) => PostRecommendationsResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                PostRecommendationsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PostRecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
