//! Gemini generateContent client — one non-streaming call per operation.
//!
//! - API key in URL query param, not header
//! - Request body `{"contents":[{"parts":{"text": <prompt>}}]}`
//! - Text lives in `candidates[0].content.parts[0].text`
//! - Never fails: every error resolves to the fallback text

use super::types::{fallback_text, ModelError};
use super::ModelClient;
use crate::settings::Settings;

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Longest slice of an error body kept in logs and fallback text.
const MAX_ERROR_BODY: usize = 200;

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.endpoint, &settings.model, &settings.api_key)
    }

    /// `<endpoint>/models/<model>:generateContent` (key goes in the query).
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn try_generate(&self, prompt: &str) -> Result<String, ModelError> {
        let response = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "contents": [
                    {
                        "parts": {
                            "text": prompt
                        }
                    }
                ]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        extract_gemini_text(&body)
    }
}

impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> String {
        log::info!("[LLM] Model: {}", self.model);
        log::debug!("[LLM] Prompt: {}", prompt);
        let start = std::time::Instant::now();

        match self.try_generate(prompt).await {
            Ok(text) => {
                log::info!(
                    "[LLM] Response: {} chars in {}ms",
                    text.chars().count(),
                    start.elapsed().as_millis()
                );
                text
            }
            Err(e) => {
                log::error!(
                    "[LLM] Call failed after {}ms: {}",
                    start.elapsed().as_millis(),
                    e
                );
                fallback_text(&e)
            }
        }
    }
}

/// Extract text content from a Gemini generateContent response body.
///
/// Gemini format: candidates[0].content.parts[0].text
pub fn extract_gemini_text(body: &str) -> Result<String, ModelError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or(ModelError::MissingText)
}
