use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Catalog backend in use ("postgres" or "json")
    pub data_source: String,
    /// Active selector ("gemini" or "deterministic")
    pub selector: String,
    /// Preferred Gemini model id
    pub model: String,
    /// Retry Gemini model id
    pub fallback_model: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    data_source: &'static str,
    ai_enabled: bool,
    model: String,
    fallback_model: String,
}

impl Api {
    pub fn new(
        data_source: &'static str,
        ai_enabled: bool,
        model: String,
        fallback_model: String,
    ) -> Self {
        Self {
            data_source,
            ai_enabled,
            model,
            fallback_model,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports the service status together with the active catalog backend
    /// and ranking configuration. Public, no authentication.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            data_source: self.data_source.to_string(),
            selector: if self.ai_enabled {
                "gemini".to_string()
            } else {
                "deterministic".to_string()
            },
            model: self.model.clone(),
            fallback_model: self.fallback_model.clone(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
