//! Generative-text providers and the two generators built on them.
//!
//! Providers are tried in order by a [`ProviderChain`]; the first success
//! wins. The concrete OpenAI and Gemini providers live in `wsa-ai`.

#[cfg(test)]
pub(crate) mod mock;
pub mod prompt;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{WsaError, WsaResult};
use crate::metrics::model::MetricsSummary;

/// Text returned for the profile when no company name was given.
pub const NO_COMPANY_INFO: &str = "No company information provided.";

/// A generative-text backend.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short provider name for logs and notices.
    fn name(&self) -> &str;

    /// Generate a completion for a single user prompt.
    async fn generate(&self, prompt: &str) -> WsaResult<String>;
}

/// Ordered list of providers tried in sequence until one succeeds.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn TextProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { providers }
    }

    /// Append a provider to the end of the chain.
    pub fn with(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in the order they are tried.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Try each provider once, in order. The first success is returned verbatim.
    pub async fn generate(&self, prompt: &str) -> WsaResult<String> {
        if self.providers.is_empty() {
            return Err(WsaError::generation("no AI service is configured"));
        }

        let mut failures = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.generate(prompt).await {
                Ok(text) => {
                    debug!(provider = provider.name(), chars = text.len(), "Generated text");
                    return Ok(text);
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "Provider failed");
                    failures.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        Err(WsaError::Generation(failures.join("; ")))
    }
}

/// Generate a short markdown company profile.
///
/// A blank company name yields [`NO_COMPANY_INFO`] without calling any provider.
pub async fn generate_profile(chain: &ProviderChain, company_name: &str) -> WsaResult<String> {
    if company_name.trim().is_empty() {
        return Ok(NO_COMPANY_INFO.to_string());
    }
    chain.generate(&prompt::profile_prompt(company_name)).await
}

/// Generate recommendations from whichever inputs are available.
pub async fn generate_recommendations(
    chain: &ProviderChain,
    metrics: Option<&MetricsSummary>,
    profile: Option<&str>,
    use_case: &str,
) -> WsaResult<String> {
    chain
        .generate(&prompt::recommendation_prompt(metrics, profile, use_case))
        .await
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedProvider;
    use super::*;

    fn metrics() -> MetricsSummary {
        MetricsSummary {
            space_count: 4,
            folder_count: 7,
            list_count: 12,
            total_tasks: 10,
            completed_tasks: 6,
            completion_rate: 0.6,
            overdue_tasks: 3,
            high_priority_tasks: 2,
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = Arc::new(ScriptedProvider::answering("openai", "from primary"));
        let fallback = Arc::new(ScriptedProvider::answering("gemini", "from fallback"));
        let chain = ProviderChain::default().with(primary.clone()).with(fallback.clone());

        assert_eq!(chain.generate("hi").await.unwrap(), "from primary");
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_fallback_called_once_and_returned_verbatim() {
        let primary = Arc::new(ScriptedProvider::failing("openai"));
        let fallback = Arc::new(ScriptedProvider::answering("gemini", "  **verbatim**\n"));
        let chain = ProviderChain::default().with(primary.clone()).with(fallback.clone());

        assert_eq!(chain.generate("hi").await.unwrap(), "  **verbatim**\n");
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
        assert_eq!(fallback.prompts(), vec!["hi".to_string()]);
    }

    #[tokio::test]
    async fn test_all_providers_fail() {
        let chain = ProviderChain::default()
            .with(Arc::new(ScriptedProvider::failing("openai")))
            .with(Arc::new(ScriptedProvider::failing("gemini")));

        let err = chain.generate("hi").await.unwrap_err();
        match err {
            WsaError::Generation(msg) => {
                assert!(msg.contains("openai"));
                assert!(msg.contains("gemini"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_chain_is_generation_error() {
        let err = ProviderChain::default().generate("hi").await.unwrap_err();
        assert!(matches!(err, WsaError::Generation(_)));
    }

    #[tokio::test]
    async fn test_profile_without_company_skips_providers() {
        let provider = Arc::new(ScriptedProvider::answering("openai", "profile"));
        let chain = ProviderChain::default().with(provider.clone());

        assert_eq!(generate_profile(&chain, "  ").await.unwrap(), NO_COMPANY_INFO);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_profile_prompt_reaches_provider() {
        let provider = Arc::new(ScriptedProvider::answering("openai", "Acme profile"));
        let chain = ProviderChain::default().with(provider.clone());

        assert_eq!(generate_profile(&chain, "Acme").await.unwrap(), "Acme profile");
        assert!(provider.prompts()[0].contains("company profile for Acme"));
    }

    #[tokio::test]
    async fn test_recommendations_with_empty_use_case_reference_metrics() {
        let chain = ProviderChain::default().with(Arc::new(ScriptedProvider::echo("echo")));

        let text = generate_recommendations(&chain, Some(&metrics()), None, "")
            .await
            .unwrap();
        assert!(!text.is_empty());
        assert!(text.contains("- Total Tasks: 10"));
        assert!(text.contains("- Overdue Tasks: 3"));
    }

    #[test]
    fn test_chain_names_in_order() {
        let chain = ProviderChain::new(vec![
            Arc::new(ScriptedProvider::failing("openai")) as Arc<dyn TextProvider>,
            Arc::new(ScriptedProvider::failing("gemini")),
        ]);
        assert_eq!(chain.names(), vec!["openai", "gemini"]);
        assert!(!chain.is_empty());
    }
}
