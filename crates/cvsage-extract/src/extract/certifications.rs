//! Certification lines — vendor patterns, or keyword plus year on the same line.

use std::collections::BTreeSet;

use crate::dictionaries::Dictionary;
use crate::normalize::NormalizedText;

const MIN_LINE_CHARS: usize = 5;
const MAX_LINE_CHARS: usize = 200;

pub fn extract_certifications(text: &NormalizedText, dict: &Dictionary) -> BTreeSet<String> {
    let mut certifications = BTreeSet::new();

    for (line, lower) in text.non_blank_lines() {
        if dict.certification_patterns.iter().any(|re| re.is_match(line))
            || keyword_with_year(line, lower, dict)
        {
            certifications.insert(line.to_string());
        }
    }

    certifications
}

/// Both a certification keyword and a 201x/202x year, on a line of sane length.
fn keyword_with_year(line: &str, lower: &str, dict: &Dictionary) -> bool {
    let chars = line.chars().count();
    if chars <= MIN_LINE_CHARS || chars >= MAX_LINE_CHARS {
        return false;
    }
    dict.certification_keywords
        .iter()
        .any(|kw| lower.contains(kw.as_str()))
        && dict.certification_year.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn certifications(text: &str) -> BTreeSet<String> {
        extract_certifications(&normalize(text), Dictionary::default_cv())
    }

    #[test]
    fn test_keyword_without_year_needs_vendor_pattern() {
        assert!(certifications("Certified Professional").is_empty());
        assert!(certifications("AWS Certified Professional").contains("AWS Certified Professional"));
    }

    #[test]
    fn test_keyword_and_year_conjunction() {
        let found = certifications("First Aid Certificate 2021");
        assert!(found.contains("First Aid Certificate 2021"));
        assert!(certifications("Joined the team in 2021").is_empty());
    }

    #[test]
    fn test_year_range() {
        assert!(certifications("Safety certificate 2009").is_empty());
        assert!(certifications("Safety certificate 2030").is_empty());
    }

    #[test]
    fn test_vendor_patterns() {
        let found = certifications(
            "Google Cloud Certified Professional Data Engineer\n\
             CKAD\n\
             CompTIA Security+\n\
             Certified ScrumMaster training notes",
        );
        assert!(found.contains("Google Cloud Certified Professional Data Engineer"));
        assert!(found.contains("CKAD"));
        assert!(found.contains("CompTIA Security+"));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_length_bound_on_heuristic() {
        let long = format!("certificate 2021 {}", "x".repeat(200));
        assert!(certifications(&long).is_empty());
    }
}
