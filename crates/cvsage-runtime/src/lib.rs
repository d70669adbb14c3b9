//! Extraction runtime — decides between remote and heuristic extraction.
//!
//! Exactly one remote attempt per request; if and only if it fails, exactly
//! one local heuristic pass. The caller always gets a profile plus the path
//! that produced it.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::*;
