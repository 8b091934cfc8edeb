//! # WSA AI
//!
//! OpenAI and Gemini implementations of `TextProvider`, and the
//! construction of the primary/fallback chain from configuration.

pub mod gemini;
pub mod openai;

use std::sync::Arc;
use tracing::info;

use wsa_core::{AppConfig, ProviderChain};

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Build the provider chain: OpenAI first, Gemini as fallback.
///
/// Providers without a credential are left out, so the chain may be empty.
pub fn build_chain(config: &AppConfig) -> ProviderChain {
    let mut chain = ProviderChain::default();

    if let Some(key) = &config.openai_api_key {
        chain = chain.with(Arc::new(OpenAiProvider::new(
            key,
            config.openai_org_id.as_deref(),
            &config.openai,
        )));
    }
    if let Some(key) = &config.gemini_api_key {
        chain = chain.with(Arc::new(GeminiProvider::new(key, &config.gemini)));
    }

    info!(providers = ?chain.names(), "AI provider chain ready");
    chain
}
