use std::env;

/// Configuration for Gemini API access.
///
/// A missing API key is not fatal: the service starts with the
/// deterministic selector instead of the AI one.
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub fallback_model: String,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (optional)
    /// - GEMINI_MODEL: preferred model id (default: "models/gemini-2.5-flash")
    /// - GEMINI_FALLBACK_MODEL: retry model id (default: "models/gemini-2.0-flash")
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "models/gemini-2.5-flash".to_string());
        let fallback_model = env::var("GEMINI_FALLBACK_MODEL")
            .unwrap_or_else(|_| "models/gemini-2.0-flash".to_string());

        Self {
            api_key,
            model,
            fallback_model,
        }
    }
}
