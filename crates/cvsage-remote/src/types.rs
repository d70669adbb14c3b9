//! Remote extraction types and error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generative-text provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteProvider {
    Gemini,
    OpenAI,
    Anthropic,
    Groq,
}

impl RemoteProvider {
    /// Default API root; `RemoteConfig::base_url` overrides it.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            RemoteProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            RemoteProvider::OpenAI => "https://api.openai.com/v1",
            RemoteProvider::Anthropic => "https://api.anthropic.com/v1",
            RemoteProvider::Groq => "https://api.groq.com/openai/v1",
        }
    }
}

impl std::fmt::Display for RemoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteProvider::Gemini => write!(f, "gemini"),
            RemoteProvider::OpenAI => write!(f, "openai"),
            RemoteProvider::Anthropic => write!(f, "anthropic"),
            RemoteProvider::Groq => write!(f, "groq"),
        }
    }
}

/// Why a remote extraction attempt failed.
#[derive(Error, Debug)]
pub enum RemoteExtractionError {
    #[error("No API key configured for remote extraction")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Empty response from provider")]
    EmptyResponse,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl RemoteExtractionError {
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::MissingCredential => RemoteErrorKind::MissingCredential,
            Self::Transport(_) => RemoteErrorKind::Transport,
            Self::Http { .. } => RemoteErrorKind::Http,
            Self::EmptyResponse => RemoteErrorKind::EmptyResponse,
            Self::MalformedPayload(_) => RemoteErrorKind::MalformedPayload,
        }
    }
}

impl From<reqwest::Error> for RemoteExtractionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport(format!("Request timed out: {}", e))
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Payload-free discriminant of [`RemoteExtractionError`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoteErrorKind {
    MissingCredential,
    Transport,
    Http,
    EmptyResponse,
    MalformedPayload,
}

impl std::fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "missingCredential"),
            Self::Transport => write!(f, "transportError"),
            Self::Http => write!(f, "httpError"),
            Self::EmptyResponse => write!(f, "emptyResponse"),
            Self::MalformedPayload => write!(f, "malformedPayload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            RemoteExtractionError::MissingCredential.kind(),
            RemoteErrorKind::MissingCredential
        );
        let http = RemoteExtractionError::Http {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(http.kind(), RemoteErrorKind::Http);
        assert_eq!(http.to_string(), "API error 401: unauthorized");
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let json = serde_json::to_string(&RemoteErrorKind::MalformedPayload).unwrap();
        assert_eq!(json, "\"malformedPayload\"");
    }
}
