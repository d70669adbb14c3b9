//! Remote extractor trait and its HTTP implementation.
//!
//! Gemini uses `generateContent`, OpenAI and Groq share the chat-completions
//! format, Anthropic uses the Messages API. All calls are single-shot and
//! non-streaming.

use std::time::Duration;

use async_trait::async_trait;
use cvsage_extract::ExtractedProfile;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::{RemoteConfig, ResolvedProvider};
use crate::payload::parse_profile;
use crate::prompt::build_extraction_prompt;
use crate::types::{RemoteExtractionError, RemoteProvider};

/// Low temperature keeps the structured answer stable between calls.
const TEMPERATURE: f64 = 0.1;
const MAX_TOKENS: usize = 2048;

/// A service that turns CV text into a profile remotely.
#[async_trait]
pub trait RemoteExtractor: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// One extraction attempt. Implementations must not retry.
    async fn extract(&self, text: &str) -> Result<ExtractedProfile, RemoteExtractionError>;
}

/// [`RemoteExtractor`] backed by a generative-text HTTP API.
pub struct HttpRemoteExtractor {
    client: Client,
    config: RemoteConfig,
}

impl HttpRemoteExtractor {
    /// Build an extractor whose requests are bounded by `timeout`.
    pub fn new(config: RemoteConfig, timeout: Duration) -> cvsage_core::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| cvsage_core::Error::Http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn complete(
        &self,
        resolved: &ResolvedProvider,
        prompt: &str,
    ) -> Result<String, RemoteExtractionError> {
        let base = self.config.base_url_for(resolved.provider);

        let request = match resolved.provider {
            RemoteProvider::Gemini => self
                .client
                .post(format!("{}/models/{}:generateContent", base, resolved.model))
                .header("x-goog-api-key", &resolved.api_key)
                .json(&json!({
                    "contents": [{"role": "user", "parts": [{"text": prompt}]}],
                    "generationConfig": {
                        "temperature": TEMPERATURE,
                        "maxOutputTokens": MAX_TOKENS,
                    },
                })),
            RemoteProvider::OpenAI | RemoteProvider::Groq => self
                .client
                .post(format!("{}/chat/completions", base))
                .header("Authorization", format!("Bearer {}", resolved.api_key))
                .json(&json!({
                    "model": resolved.model,
                    "messages": [{"role": "user", "content": prompt}],
                    "temperature": TEMPERATURE,
                    "max_tokens": MAX_TOKENS,
                })),
            RemoteProvider::Anthropic => self
                .client
                .post(format!("{}/messages", base))
                .header("x-api-key", &resolved.api_key)
                .header("anthropic-version", "2023-06-01")
                .json(&json!({
                    "model": resolved.model,
                    "messages": [{"role": "user", "content": prompt}],
                    "temperature": TEMPERATURE,
                    "max_tokens": MAX_TOKENS,
                })),
        };

        debug!("Requesting extraction from {} with model {}", resolved.provider, resolved.model);

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteExtractionError::Http { status, body });
        }

        let body = response.text().await?;
        let envelope: Value = serde_json::from_str(&body).map_err(|e| {
            RemoteExtractionError::MalformedPayload(format!("Invalid response envelope: {}", e))
        })?;

        response_text(resolved.provider, &envelope).ok_or(RemoteExtractionError::EmptyResponse)
    }
}

#[async_trait]
impl RemoteExtractor for HttpRemoteExtractor {
    fn name(&self) -> &str {
        "http"
    }

    async fn extract(&self, text: &str) -> Result<ExtractedProfile, RemoteExtractionError> {
        let resolved = self
            .config
            .resolve_provider()
            .ok_or(RemoteExtractionError::MissingCredential)?;

        let prompt = build_extraction_prompt(text);
        let reply = self.complete(&resolved, &prompt).await?;

        parse_profile(&reply).map_err(|e| {
            warn!("{} reply could not be parsed: {}", resolved.provider, e);
            e
        })
    }
}

/// Pull the generated text out of a provider's response envelope.
///
/// `None` when the envelope has no text or only whitespace.
fn response_text(provider: RemoteProvider, envelope: &Value) -> Option<String> {
    let text = match provider {
        RemoteProvider::Gemini => envelope["candidates"][0]["content"]["parts"]
            .as_array()?
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect::<String>(),
        RemoteProvider::OpenAI | RemoteProvider::Groq => envelope["choices"][0]["message"]
            ["content"]
            .as_str()?
            .to_string(),
        RemoteProvider::Anthropic => envelope["content"]
            .as_array()?
            .iter()
            .filter(|block| block["type"] == "text")
            .filter_map(|block| block["text"].as_str())
            .collect::<String>(),
    };

    (!text.trim().is_empty()).then_some(text)
}
