use std::time::Duration;

use reqwest::Client;

/// Shared Gemini HTTP client configuration.
///
/// The request timeout bounds the only blocking call in the pipeline; a
/// timed-out call is treated as the service being unavailable.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for a model id
    /// (e.g. "models/gemini-2.5-flash").
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model)
    }
}
