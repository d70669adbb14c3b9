//! Bulleted project descriptions and quantifiable achievements.

use std::collections::BTreeSet;

use super::contains_word;
use crate::dictionaries::Dictionary;
use crate::normalize::NormalizedText;

const MAX_PROJECT_CHARS: usize = 150;
const MAX_ACHIEVEMENT_CHARS: usize = 200;

/// Bulleted lines naming something that was built.
pub fn extract_projects(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    extract_bulleted(text, dict, &dict.project_terms, MAX_PROJECT_CHARS)
}

/// Bulleted lines led by an achievement verb anywhere in the line.
pub fn extract_achievements(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    extract_bulleted(text, dict, &dict.achievement_verbs, MAX_ACHIEVEMENT_CHARS)
}

fn extract_bulleted(
    text: &NormalizedText,
    dict: &Dictionary,
    terms: &[String],
    max_chars: usize,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    for (line, _) in text.non_blank_lines() {
        let Some(body) = strip_bullet(line, &dict.bullet_markers) else {
            continue;
        };
        if body.is_empty() || body.chars().count() > max_chars {
            continue;
        }
        let lower = body.to_lowercase();
        if terms.iter().any(|term| contains_word(&lower, term)) {
            found.insert(body.to_string());
        }
    }

    found
}

/// Text after a leading bullet marker, trimmed. `None` if the line is not bulleted.
pub fn strip_bullet<'a>(line: &'a str, markers: &[char]) -> Option<&'a str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    if markers.contains(&first) {
        Some(chars.as_str().trim())
    } else {
        None
    }
}
