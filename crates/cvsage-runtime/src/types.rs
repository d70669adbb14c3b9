//! Runtime types.

use std::time::Duration;

use cvsage_core::config::DEFAULT_REMOTE_TIMEOUT_SECS;
use cvsage_core::CvSageConfig;
use cvsage_extract::ExtractedProfile;
use cvsage_remote::RemoteErrorKind;
use serde::Serialize;

/// Which strategy produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionPath {
    /// Remote generative-text service.
    Remote,
    /// Local dictionary/pattern heuristics.
    Local,
}

impl std::fmt::Display for ExtractionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Result of one extraction request.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub profile: ExtractedProfile,
    pub path: ExtractionPath,
    /// Set when the local path ran because the remote attempt failed.
    #[serde(rename = "fallbackReason", skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<RemoteErrorKind>,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
}

impl ExtractionOutcome {
    pub fn summary(&self) -> String {
        self.profile.summary()
    }

    /// Whether the remote path was attempted and failed.
    pub fn fell_back(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Orchestrator settings, injected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSettings {
    /// When false the remote path is never attempted.
    pub remote_enabled: bool,
    /// Upper bound for the single remote attempt.
    pub remote_timeout: Duration,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            remote_enabled: true,
            remote_timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
        }
    }
}

impl ExtractionSettings {
    /// Settings that never touch the network.
    pub fn local_only() -> Self {
        Self {
            remote_enabled: false,
            ..Self::default()
        }
    }
}

impl From<&CvSageConfig> for ExtractionSettings {
    fn from(config: &CvSageConfig) -> Self {
        Self {
            remote_enabled: config.remote_extraction,
            remote_timeout: config.remote_timeout(),
        }
    }
}
