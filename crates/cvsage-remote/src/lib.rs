//! Remote CV extraction through external generative-text APIs.
//!
//! One request per extraction, no retries. The response is free-form text
//! expected to embed a JSON object matching the profile schema.

pub mod client;
pub mod config;
pub mod payload;
pub mod prompt;
pub mod types;

pub use client::{HttpRemoteExtractor, RemoteExtractor};
pub use config::RemoteConfig;
pub use types::*;
