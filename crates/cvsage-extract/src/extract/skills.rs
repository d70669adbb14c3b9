//! Skill extraction by case-insensitive containment over the full text.

use std::collections::BTreeSet;

use crate::normalize::NormalizedText;

/// Collect every dictionary term contained anywhere in the text.
///
/// Matching is case-insensitive; stored values keep the dictionary's casing.
pub fn extract_skills(text: &NormalizedText, terms: &[String]) -> BTreeSet<String> {
    let lower = text.lower();
    terms
        .iter()
        .filter(|term| !term.is_empty() && lower.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}
