//! Configuration and data directory management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Default bound on a single remote extraction attempt.
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// Paths to CVSage data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Remote provider configuration (`data/remote-config.json`).
    pub remote_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            remote_config_file: root.join("remote-config.json"),
            root,
        })
    }
}

/// Top-level CVSage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvSageConfig {
    /// Whether the remote extraction path may be attempted at all.
    pub remote_extraction: bool,
    /// Upper bound for one remote attempt, in seconds.
    pub remote_timeout_secs: u64,
    /// Data directory paths.
    pub data_paths: DataPaths,
}

impl CvSageConfig {
    /// Create configuration from process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key-value lookup.
    ///
    /// Recognised keys: `CVSAGE_REMOTE_EXTRACTION`, `CVSAGE_REMOTE_TIMEOUT_SECS`,
    /// `CVSAGE_DATA_DIR`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let remote_extraction = match lookup("CVSAGE_REMOTE_EXTRACTION") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                Error::Config(format!("CVSAGE_REMOTE_EXTRACTION: invalid boolean '{}'", raw))
            })?,
            None => true,
        };

        let remote_timeout_secs = lookup("CVSAGE_REMOTE_TIMEOUT_SECS")
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => {
                    warn!("Ignoring invalid CVSAGE_REMOTE_TIMEOUT_SECS={}", raw);
                    None
                }
                Ok(secs) => Some(secs),
            })
            .unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS);

        let data_dir = lookup("CVSAGE_DATA_DIR").unwrap_or_else(|| "data".into());
        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            remote_extraction,
            remote_timeout_secs,
            data_paths,
        })
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
