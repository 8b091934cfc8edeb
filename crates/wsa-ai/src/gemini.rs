//! Google Gemini `generateContent` provider (fallback).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use wsa_core::config::GeminiSettings;
use wsa_core::{TextProvider, WsaError, WsaResult};

/// Gemini API client.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiProvider {
    pub fn new(api_key: &str, settings: &GeminiSettings) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> WsaResult<String> {
        let request = GenerateRequest {
            contents: vec![Content { role: "user", parts: vec![Part { text: prompt }] }],
        };

        debug!(model = %self.model, "Calling Gemini generateContent");
        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| WsaError::generation(format!("failed to call Gemini: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WsaError::generation(format!("Gemini API error ({}): {}", status, body)));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| WsaError::generation(format!("failed to parse Gemini response: {}", e)))?;

        // Only the first candidate is used; its text parts are joined in order.
        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(WsaError::generation("Gemini returned no content"));
        }
        Ok(text)
    }
}
