//! Role titles and years of experience.

use std::collections::BTreeSet;

use crate::dictionaries::Dictionary;
use crate::normalize::NormalizedText;
use crate::profile::MAX_PLAUSIBLE_YEARS;

/// Canonical role titles mentioned on any line.
pub fn extract_roles(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    let mut roles = BTreeSet::new();
    for (_, lower) in text.non_blank_lines() {
        for title in &dict.role_titles {
            if lower.contains(&title.to_lowercase()) {
                roles.insert(title.clone());
            }
        }
    }
    roles
}

/// Years of experience from the first pattern, in priority order, that matches.
///
/// Only one value is ever returned; mentions are never summed. Returns 0 when
/// nothing matches.
pub fn extract_years(text: &NormalizedText, dict: &Dictionary) -> u32 {
    for pattern in &dict.years_patterns {
        let found = pattern.captures_iter(text.lower()).find_map(|cap| {
            cap.get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .filter(|years| *years <= MAX_PLAUSIBLE_YEARS)
        });
        if let Some(years) = found {
            return years;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn years(text: &str) -> u32 {
        extract_years(&normalize(text), Dictionary::default_cv())
    }

    #[test]
    fn test_priority_beats_position() {
        assert_eq!(years("Worked 3 years at Foo.\n5+ years of experience overall"), 5);
    }

    #[test]
    fn test_pattern_variants() {
        assert_eq!(years("10 years experience in fintech"), 10);
        assert_eq!(years("Experience: 7 years in mobile"), 7);
        assert_eq!(years("4 yrs at Globex"), 4);
        assert_eq!(years("Over 12 Years Of Experience"), 12);
    }

    #[test]
    fn test_decimal_years() {
        assert_eq!(years("1.5 years of experience in Swift"), 1);
        assert_eq!(years("2.5+ years of experience"), 2);
        assert_eq!(years("Experience: 3.5 years in QA"), 3);
        assert_eq!(years("0.5 yrs internship"), 0);
    }

    #[test]
    fn test_no_match_defaults_to_zero() {
        assert_eq!(years(""), 0);
        assert_eq!(years("Recent graduate"), 0);
    }

    #[test]
    fn test_implausible_values_skipped() {
        assert_eq!(years("2023 years of experience"), 0);
        assert_eq!(years("2023 years of experience, really 6 years of experience"), 6);
    }

    #[test]
    fn test_roles_are_canonical_titles() {
        let text = normalize("2019-2023 iOS developer at Initech\nmentored a junior data analyst");
        let roles = extract_roles(&text, Dictionary::default_cv());
        assert_eq!(
            roles.into_iter().collect::<Vec<_>>(),
            vec!["Data Analyst".to_string(), "iOS Developer".to_string()]
        );
    }
}
