//! Remote provider configuration persistence and provider selection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::RemoteProvider;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Stored remote configuration (persisted to remote-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Overrides the resolved provider's API root (proxies, gateways).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "auto".into(),
            gemini_api_key: None,
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            base_url: None,
            config_path: PathBuf::new(),
        }
    }
}

/// A provider ready to call: who, which model, which key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: RemoteProvider,
    pub model: String,
    pub api_key: String,
}

impl RemoteConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load config from file, filling missing keys from `lookup`.
    pub fn load_with(config_path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config: RemoteConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        // Env vars as fallback for API keys
        if config.gemini_api_key.is_none() {
            config.gemini_api_key = lookup("GEMINI_API_KEY");
        }
        if config.openai_api_key.is_none() {
            config.openai_api_key = lookup("OPENAI_API_KEY");
        }
        if config.anthropic_api_key.is_none() {
            config.anthropic_api_key = lookup("ANTHROPIC_API_KEY");
        }
        if config.groq_api_key.is_none() {
            config.groq_api_key = lookup("GROQ_API_KEY");
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> cvsage_core::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved remote config to {}", self.config_path.display());
        Ok(())
    }

    /// Resolve which provider, model and key to use. `None` means no usable credential.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        let resolved = |provider, model: &String, key: &Option<String>| {
            usable_key(key).map(|api_key| ResolvedProvider {
                provider,
                model: model.clone(),
                api_key,
            })
        };

        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "gemini" => resolved(RemoteProvider::Gemini, &self.gemini_model, &self.gemini_api_key),
                "openai" => resolved(RemoteProvider::OpenAI, &self.openai_model, &self.openai_api_key),
                "anthropic" => resolved(
                    RemoteProvider::Anthropic,
                    &self.anthropic_model,
                    &self.anthropic_api_key,
                ),
                "groq" => resolved(RemoteProvider::Groq, &self.groq_model, &self.groq_api_key),
                _ => None,
            };
        }

        // Auto mode: Gemini > Anthropic > Groq > OpenAI
        resolved(RemoteProvider::Gemini, &self.gemini_model, &self.gemini_api_key)
            .or_else(|| {
                resolved(
                    RemoteProvider::Anthropic,
                    &self.anthropic_model,
                    &self.anthropic_api_key,
                )
            })
            .or_else(|| resolved(RemoteProvider::Groq, &self.groq_model, &self.groq_api_key))
            .or_else(|| resolved(RemoteProvider::OpenAI, &self.openai_model, &self.openai_api_key))
    }

    /// Whether any provider has a usable credential.
    pub fn is_configured(&self) -> bool {
        self.resolve_provider().is_some()
    }

    /// API root for `provider`, honouring `base_url`.
    pub fn base_url_for(&self, provider: RemoteProvider) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

fn usable_key(key: &Option<String>) -> Option<String> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}
