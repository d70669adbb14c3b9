//! CVSage Extract — text normalization, CV dictionaries, heuristic profile extraction.

pub mod dictionaries;
pub mod extract;
pub mod normalize;
pub mod profile;

pub use dictionaries::Dictionary;
pub use extract::{extract_profile, extract_profile_with};
pub use normalize::{normalize, NormalizedText};
pub use profile::{build_interview_context, ExtractedProfile, MAX_PLAUSIBLE_YEARS};
