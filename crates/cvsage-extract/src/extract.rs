//! Heuristic CV extraction — one pure function per profile attribute.
//!
//! Every extractor is total: no input makes it fail, and absence of matches
//! yields an empty set or zero. Results are `BTreeSet`s so output order never
//! depends on dictionary iteration order.

pub mod bullets;
pub mod certifications;
pub mod education;
pub mod experience;
pub mod languages;
pub mod skills;

use tracing::debug;

use crate::dictionaries::Dictionary;
use crate::normalize::normalize;
use crate::profile::ExtractedProfile;

/// Run every heuristic extractor against `text` using the shared CV dictionary.
pub fn extract_profile(text: &str) -> ExtractedProfile {
    extract_profile_with(text, Dictionary::default_cv())
}

/// Run every heuristic extractor against `text` using a caller-supplied dictionary.
pub fn extract_profile_with(text: &str, dict: &Dictionary) -> ExtractedProfile {
    let normalized = normalize(text);

    let profile = ExtractedProfile {
        technical_skills: skills::extract_skills(&normalized, &dict.technical_skills),
        soft_skills: skills::extract_skills(&normalized, &dict.soft_skills),
        work_experience: experience::extract_roles(&normalized, dict),
        years_of_experience: experience::extract_years(&normalized, dict),
        education: education::extract_education(&normalized, dict),
        certifications: certifications::extract_certifications(&normalized, dict),
        projects: bullets::extract_projects(&normalized, dict),
        achievements: bullets::extract_achievements(&normalized, dict),
        languages: languages::extract_languages(&normalized, dict),
    };

    debug!(
        "Heuristic extraction: {} technical, {} soft, {} roles, {} years, {} education, {} certifications, {} projects, {} achievements",
        profile.technical_skills.len(),
        profile.soft_skills.len(),
        profile.work_experience.len(),
        profile.years_of_experience,
        profile.education.len(),
        profile.certifications.len(),
        profile.projects.len(),
        profile.achievements.len(),
    );

    profile
}

/// Split a lowercase line into alphanumeric words.
pub(crate) fn words(lower_line: &str) -> impl Iterator<Item = &str> {
    lower_line
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Whether `lower_line` contains `term` as a whole word, allowing a plural `s`.
pub(crate) fn contains_word(lower_line: &str, term: &str) -> bool {
    words(lower_line).any(|w| w == term || w.strip_suffix('s') == Some(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CV: &str = "Jane Doe\n\
        Senior Software Engineer at Acme\n\
        8+ years of experience building mobile apps with Swift and Kotlin.\n\
        Strong communication and leadership.\n\
        \n\
        • Built TaskManager Pro app used by 10k people\n\
        • Increased crash-free sessions by 20%\n\
        - Led migration to SwiftUI\n\
        \n\
        Bachelor of Science in Computer Science, GPA: 3.8\n\
        AWS Certified Solutions Architect (2022)\n\
        Languages: English (native), Spanish (fluent)";

    #[test]
    fn test_extract_profile_full_sample() {
        let p = extract_profile(SAMPLE_CV);
        assert!(p.technical_skills.contains("Swift"));
        assert!(p.technical_skills.contains("SwiftUI"));
        assert!(p.technical_skills.contains("Kotlin"));
        assert!(p.soft_skills.contains("Communication"));
        assert!(p.soft_skills.contains("Leadership"));
        assert!(p.work_experience.contains("Senior Software Engineer"));
        assert_eq!(p.years_of_experience, 8);
        assert!(p
            .education
            .contains("Bachelor of Science in Computer Science, GPA: 3.8"));
        assert!(p.certifications.contains("AWS Certified Solutions Architect (2022)"));
        assert!(p.projects.contains("Built TaskManager Pro app used by 10k people"));
        assert!(p.achievements.contains("Increased crash-free sessions by 20%"));
        assert!(p.achievements.contains("Led migration to SwiftUI"));
        assert!(p.languages.contains("English"));
        assert!(p.languages.contains("Spanish"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(extract_profile(SAMPLE_CV), extract_profile(SAMPLE_CV));
    }

    #[test]
    fn test_empty_input_gives_empty_profile() {
        let p = extract_profile("");
        assert_eq!(p, ExtractedProfile::default());
        assert_eq!(p.summary(), "");
    }

    #[test]
    fn test_custom_dictionary() {
        let mut dict = Dictionary::default();
        dict.technical_skills.push("Zig".into());
        let p = extract_profile_with("Hobby projects in zig", &dict);
        assert!(p.technical_skills.contains("Zig"));
        assert!(!extract_profile("Hobby projects in zig")
            .technical_skills
            .contains("Zig"));
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("built two apps", "app"));
        assert!(contains_word("led the team", "led"));
        assert!(!contains_word("developed the approach", "led"));
        assert!(!contains_word("developed the approach", "app"));
    }
}
