use std::env;
use std::path::PathBuf;

/// Catalog backend selection: PostgreSQL or a local JSON file.
pub enum DataSourceConfig {
    Postgres { url: String },
    JsonFile { path: PathBuf },
}

impl DataSourceConfig {
    /// Environment variables:
    /// - USE_POSTGRES: truthy ("1", "true", "yes", "on") to enable Postgres
    /// - DATABASE_URL: PostgreSQL connection string (required with USE_POSTGRES)
    /// - PRODUCTS_PATH: JSON catalog path (default: "data/products.json")
    pub fn from_env() -> Self {
        let use_postgres = env::var("USE_POSTGRES")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        if use_postgres {
            if let Ok(url) = env::var("DATABASE_URL") {
                return Self::Postgres { url };
            }
        }

        let path = env::var("PRODUCTS_PATH").unwrap_or_else(|_| "data/products.json".to_string());
        Self::JsonFile {
            path: PathBuf::from(path),
        }
    }

    /// Label reported by the health endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::JsonFile { .. } => "json",
        }
    }
}
