//! Centralized error types for WSA.

use thiserror::Error;

/// Main error type for WSA operations.
#[derive(Error, Debug)]
pub enum WsaError {
    #[error("ClickUp authentication failed: {0}")]
    Authentication(String),

    #[error("ClickUp request failed: {0}")]
    Network(String),

    #[error("No teams found in ClickUp workspace.")]
    EmptyWorkspace,

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for WSA operations.
pub type WsaResult<T> = Result<T, WsaError>;

impl WsaError {
    /// Create an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a generation error.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }
}
