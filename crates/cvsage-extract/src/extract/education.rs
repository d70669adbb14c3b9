//! Education lines — curated patterns unioned with a keyword-density heuristic.

use std::collections::BTreeSet;

use crate::dictionaries::Dictionary;
use crate::normalize::NormalizedText;

/// Minimum distinct education keywords for a line to qualify by density.
const MIN_KEYWORD_HITS: usize = 2;
const MIN_LINE_CHARS: usize = 10;
const MAX_LINE_CHARS: usize = 300;

pub fn extract_education(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    let mut education = BTreeSet::new();

    for (line, lower) in text.non_blank_lines() {
        if dict.education_patterns.iter().any(|re| re.is_match(line)) {
            education.insert(line.to_string());
            continue;
        }

        let hits = dict
            .education_keywords
            .iter()
            .filter(|kw| lower.contains(kw.as_str()))
            .count();
        let chars = line.chars().count();
        if hits >= MIN_KEYWORD_HITS && chars > MIN_LINE_CHARS && chars < MAX_LINE_CHARS {
            education.insert(line.to_string());
        }
    }

    education
}
