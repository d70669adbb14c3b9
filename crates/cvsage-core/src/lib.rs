//! CVSage Core — shared error type and runtime configuration.

pub mod config;
pub mod error;

pub use config::{CvSageConfig, DataPaths};
pub use error::{Error, Result};
