//! Process-wide configuration.
//!
//! Loaded once at startup from a TOML secrets file and passed down to every
//! component. The three provider credentials live at the top level of the
//! file using the same key names as a Streamlit `secrets.toml`, so an
//! existing secrets file works unchanged:
//!
//! ```toml
//! OPENAI_API_KEY = "sk-..."
//! OPENAI_ORG_ID = "org-..."
//! GEMINI_API_KEY = "..."
//!
//! [clickup]
//! timeout_secs = 30
//!
//! [openai]
//! model = "gpt-4o"
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{WsaError, WsaResult};

/// Default ClickUp REST API base URL.
pub const DEFAULT_CLICKUP_URL: &str = "https://api.clickup.com/api/v2";

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI chat model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Environment variable names that override file secrets.
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const ENV_OPENAI_ORG_ID: &str = "OPENAI_ORG_ID";
const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Full application configuration.
#[derive(Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "OPENAI_API_KEY", default)]
    pub openai_api_key: Option<String>,

    #[serde(rename = "OPENAI_ORG_ID", default)]
    pub openai_org_id: Option<String>,

    #[serde(rename = "GEMINI_API_KEY", default)]
    pub gemini_api_key: Option<String>,

    #[serde(default)]
    pub clickup: ClickUpSettings,

    #[serde(default)]
    pub openai: OpenAiSettings,

    #[serde(default)]
    pub gemini: GeminiSettings,
}

/// ClickUp connection tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClickUpSettings {
    pub base_url: String,
    /// Per-request timeout. Zero leaves the HTTP library default in place.
    pub timeout_secs: u64,
}

impl Default for ClickUpSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CLICKUP_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// OpenAI provider tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub model: String,
    pub base_url: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_URL.to_string(),
        }
    }
}

/// Gemini provider tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_org_id", &self.openai_org_id)
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("clickup", &self.clickup)
            .field("openai", &self.openai)
            .field("gemini", &self.gemini)
            .finish()
    }
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "***")
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> WsaResult<Self> {
        let mut config: AppConfig = toml::from_str(text)?;
        config.normalize();
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> WsaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            WsaError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Locate and load the configuration, then apply environment overrides.
    ///
    /// An explicit path must exist. Without one, the default locations are
    /// searched in order and an empty configuration is used when none exist.
    /// Returns the path that was loaded, if any.
    pub fn discover(explicit: Option<&Path>) -> WsaResult<(Self, Option<PathBuf>)> {
        let (mut config, source) = match explicit {
            Some(path) => (Self::load(path)?, Some(path.to_path_buf())),
            None => match default_locations().into_iter().find(|p| p.is_file()) {
                Some(path) => (Self::load(&path)?, Some(path)),
                None => (Self::default(), None),
            },
        };

        config.apply_env(|name| std::env::var(name).ok());
        debug!(source = ?source, openai = config.has_openai(), gemini = config.has_gemini(), "Configuration loaded");

        Ok((config, source))
    }

    /// Override secrets with values from `lookup` (normally the process environment).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_OPENAI_API_KEY) {
            self.openai_api_key = Some(v);
        }
        if let Some(v) = lookup(ENV_OPENAI_ORG_ID) {
            self.openai_org_id = Some(v);
        }
        if let Some(v) = lookup(ENV_GEMINI_API_KEY) {
            self.gemini_api_key = Some(v);
        }
        self.normalize();
    }

    /// Whether the primary (OpenAI) provider has a credential.
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Whether the fallback (Gemini) provider has a credential.
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Blank secrets count as absent.
    fn normalize(&mut self) {
        for secret in [
            &mut self.openai_api_key,
            &mut self.openai_org_id,
            &mut self.gemini_api_key,
        ] {
            if secret.as_deref().map_or(false, |s| s.trim().is_empty()) {
                *secret = None;
            }
        }
    }
}

/// Default config file locations, in search order.
pub fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(".streamlit/secrets.toml"),
        PathBuf::from("secrets.toml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("wsa").join("secrets.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_only() {
        let config = AppConfig::from_toml_str(
            "OPENAI_API_KEY = \"sk-test\"\nOPENAI_ORG_ID = \"org-1\"\nGEMINI_API_KEY = \"g-test\"\n",
        )
        .unwrap();
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_org_id.as_deref(), Some("org-1"));
        assert_eq!(config.gemini_api_key.as_deref(), Some("g-test"));
        assert_eq!(config.clickup.base_url, DEFAULT_CLICKUP_URL);
        assert_eq!(config.openai.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_tables_override_defaults() {
        let config = AppConfig::from_toml_str(
            "[clickup]\ntimeout_secs = 5\n\n[gemini]\nmodel = \"gemini-1.5-pro\"\n",
        )
        .unwrap();
        assert_eq!(config.clickup.timeout_secs, 5);
        assert_eq!(config.clickup.base_url, DEFAULT_CLICKUP_URL);
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.base_url, DEFAULT_GEMINI_URL);
        assert!(!config.has_openai());
    }

    #[test]
    fn test_blank_secret_is_absent() {
        let config = AppConfig::from_toml_str("OPENAI_API_KEY = \"  \"\n").unwrap();
        assert!(!config.has_openai());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_toml_str("GEMINI_API_KEY = \"from-file\"\n").unwrap();
        config.apply_env(|name| match name {
            "GEMINI_API_KEY" => Some("from-env".to_string()),
            "OPENAI_API_KEY" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.gemini_api_key.as_deref(), Some("from-env"));
        assert!(!config.has_openai());
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("OPENAI_API_KEY = ").unwrap_err();
        assert!(matches!(err, WsaError::Toml(_)));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = AppConfig::from_toml_str("OPENAI_API_KEY = \"sk-secret\"\n").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = AppConfig::load(Path::new("/nonexistent/wsa/secrets.toml")).unwrap_err();
        assert!(matches!(err, WsaError::Config(_)));
    }
}
