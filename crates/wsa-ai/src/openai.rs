//! OpenAI chat-completions provider (primary).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use wsa_core::config::OpenAiSettings;
use wsa_core::{TextProvider, WsaError, WsaResult};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// OpenAI chat-completions client.
pub struct OpenAiProvider {
    api_key: String,
    organization: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, organization: Option<&str>, settings: &OpenAiSettings) -> Self {
        Self {
            api_key: api_key.to_string(),
            organization: organization.map(String::from),
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> WsaResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        debug!(model = %self.model, "Calling OpenAI chat completions");
        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request);
        if let Some(org) = &self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| WsaError::generation(format!("failed to call OpenAI: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WsaError::generation(format!("OpenAI API error ({}): {}", status, body)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| WsaError::generation(format!("failed to parse OpenAI response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| WsaError::generation("OpenAI returned no content"))
    }
}
