//! Application state.

use std::sync::Arc;

use wsa_clickup::ClickUpClient;
use wsa_core::{AppConfig, ProviderChain, WorkspaceSource};

/// Application state shared across handlers. Read-only for the server's lifetime.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn WorkspaceSource>,
    pub chain: ProviderChain,
}

impl AppState {
    /// Wire the real ClickUp client and AI providers from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            source: Arc::new(ClickUpClient::from_settings(&config.clickup)),
            chain: wsa_ai::build_chain(config),
        }
    }

    /// Build state from explicit parts.
    pub fn from_parts(source: Arc<dyn WorkspaceSource>, chain: ProviderChain) -> Self {
        Self { source, chain }
    }
}
