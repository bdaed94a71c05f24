use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::product::model::Product;
use business::domain::recommendation::errors::SelectionError;
use business::domain::recommendation::model::CandidatePool;
use business::domain::recommendation::services::SelectorService;

use crate::client::GeminiClient;

/// Selector backed by the Gemini ranking service.
///
/// Models are an ordered retry list: a quota, network, or timeout failure on
/// one model moves on to the next; parse-level failures do not, since the
/// service already answered.
pub struct AiSelector {
    client: GeminiClient,
    models: Vec<String>,
}

/// Expected response shape: exactly these two fields, nothing else.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SelectionPayload {
    #[serde(rename = "primary_item_id")]
    _primary_item_id: i64,
    recommendation_ids: Vec<i64>,
}

impl AiSelector {
    pub fn new(client: GeminiClient, models: Vec<String>) -> Self {
        Self { client, models }
    }

    fn build_prompt(primary: &Product, pool: &CandidatePool, limit: usize) -> String {
        let primary_json = serde_json::to_string(primary).unwrap_or_default();
        let candidates_json = serde_json::to_string(pool.products()).unwrap_or_default();

        format!(
            r#"You are a product recommendation engine.

Primary product:
{}

Candidate products (the ONLY products you can choose from):
{}

Your task:
- Select up to {} products from the candidate list that are relevant recommendations.
- Relevance can be accessories, complements, or similar items based on category, brand, model, attributes, tags, or use-case.
- Use ONLY product IDs that appear in the candidate list.
- Do NOT invent new IDs or products.

Return ONLY valid JSON in this exact format:
{{
  "primary_item_id": <number>,
  "recommendation_ids": [<number>, ...]
}}"#,
            primary_json, candidates_json, limit
        )
    }

    /// Parses and validates the raw model output against the pool.
    ///
    /// Ids outside the pool are dropped rather than failing the call, and
    /// duplicates are removed; an empty list over a non-empty pool means the
    /// selection cannot be trusted and the caller should fall back.
    fn parse_selection(
        raw: &str,
        pool: &CandidatePool,
        limit: usize,
    ) -> Result<Vec<i64>, SelectionError> {
        // Remove markdown code blocks if present
        let mut json_text = raw.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let payload: SelectionPayload =
            serde_json::from_str(&json_text).map_err(|_| SelectionError::MalformedResponse)?;

        let mut selected: Vec<i64> = Vec::new();
        for id in payload.recommendation_ids {
            if pool.contains(id) && !selected.contains(&id) {
                selected.push(id);
            }
        }

        if selected.is_empty() && !pool.is_empty() {
            return Err(SelectionError::InvalidSelection);
        }

        selected.truncate(limit);
        Ok(selected)
    }

    /// One generateContent call; returns the raw response text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, SelectionError> {
        let body = json!({
            "contents": [
                {"parts": [{"text": prompt}]}
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.3,
                "maxOutputTokens": 256,
            },
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(model))
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| SelectionError::ServiceUnavailable)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SelectionError::QuotaExceeded);
        }
        if !status.is_success() {
            return Err(SelectionError::ServiceUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SelectionError::MalformedResponse)?;

        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"][0]["text"].as_str())
            .map(str::to_string)
            .ok_or(SelectionError::MalformedResponse)
    }
}

#[async_trait]
impl SelectorService for AiSelector {
    async fn select(
        &self,
        primary: &Product,
        pool: &CandidatePool,
        limit: usize,
    ) -> Result<Vec<i64>, SelectionError> {
        if pool.is_empty() {
            return Ok(vec![]);
        }

        let prompt = Self::build_prompt(primary, pool, limit);

        let mut last_error = SelectionError::ServiceUnavailable;
        for model in &self.models {
            match self.generate(model, &prompt).await {
                Ok(raw) => return Self::parse_selection(&raw, pool, limit),
                Err(err @ (SelectionError::QuotaExceeded | SelectionError::ServiceUnavailable)) => {
                    last_error = err;
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_error)
    }
}
