use poem::middleware::Cors;

use super::cors_config;
use super::data_config::DataSourceConfig;
use super::gemini_config::GeminiConfig;
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub data_source: DataSourceConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            data_source: DataSourceConfig::from_env(),
            gemini: GeminiConfig::from_env(),
        }
    }
}
