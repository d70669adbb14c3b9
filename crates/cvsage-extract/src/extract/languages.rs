//! Spoken languages, only on lines that talk about languages.

use std::collections::BTreeSet;

use super::contains_word;
use crate::dictionaries::Dictionary;
use crate::normalize::NormalizedText;

pub fn extract_languages(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    let mut languages = BTreeSet::new();

    for (_, lower) in text.non_blank_lines() {
        if !dict.language_markers.iter().any(|m| contains_word(lower, m)) {
            continue;
        }
        for language in &dict.spoken_languages {
            if contains_word(lower, &language.to_lowercase()) {
                languages.insert(language.clone());
            }
        }
    }

    languages
}
