//! Structured CV profile and its derived views.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Separator between summary parts.
pub const SUMMARY_SEPARATOR: &str = " • ";

/// Year counts above this are treated as noise (dates, counts), not tenure.
pub const MAX_PLAUSIBLE_YEARS: u32 = 60;

/// Number of technical skills named in the summary.
const SUMMARY_SKILLS: usize = 3;

/// Structured attributes derived from one CV text.
///
/// Produced fresh per extraction; every collection is a sorted set, so entries
/// are unique and ordering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub technical_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    /// Canonical role titles.
    pub work_experience: BTreeSet<String>,
    /// Never above [`MAX_PLAUSIBLE_YEARS`]; 0 when unknown.
    pub years_of_experience: u32,
    pub education: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub projects: BTreeSet<String>,
    pub achievements: BTreeSet<String>,
    /// Spoken languages.
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

impl ExtractedProfile {
    /// One-line summary: years, top skills, first role. Empty for an empty profile.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.years_of_experience > 0 {
            parts.push(format!("{}+ years of experience", self.years_of_experience));
        }
        if !self.technical_skills.is_empty() {
            let top: Vec<&str> = self
                .technical_skills
                .iter()
                .take(SUMMARY_SKILLS)
                .map(String::as_str)
                .collect();
            parts.push(format!("Skills: {}", top.join(", ")));
        }
        if let Some(role) = self.work_experience.iter().next() {
            parts.push(format!("Role: {}", role));
        }

        parts.join(SUMMARY_SEPARATOR)
    }

    /// Whether no attribute was extracted at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Render a profile as a compact block for an interview-session prompt.
///
/// Format: one `label: a, b, c` line per non-empty attribute.
pub fn build_interview_context(profile: &ExtractedProfile) -> String {
    let mut lines = Vec::new();

    if profile.years_of_experience > 0 {
        lines.push(format!("experience: {} years", profile.years_of_experience));
    }

    let sections: [(&str, &BTreeSet<String>); 8] = [
        ("roles", &profile.work_experience),
        ("technical skills", &profile.technical_skills),
        ("soft skills", &profile.soft_skills),
        ("education", &profile.education),
        ("certifications", &profile.certifications),
        ("projects", &profile.projects),
        ("achievements", &profile.achievements),
        ("languages", &profile.languages),
    ];
    for (label, values) in sections {
        if !values.is_empty() {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            lines.push(format!("{}: {}", label, joined.join(", ")));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ExtractedProfile::default().summary(), "");
        assert!(ExtractedProfile::default().is_empty());
    }

    #[test]
    fn test_full_summary() {
        let profile = ExtractedProfile {
            years_of_experience: 5,
            technical_skills: set(&["Swift", "Kotlin", "AWS", "Docker"]),
            work_experience: set(&["iOS Developer", "Tech Lead"]),
            ..Default::default()
        };
        assert_eq!(
            profile.summary(),
            "5+ years of experience • Skills: AWS, Docker, Kotlin • Role: Tech Lead"
        );
    }

    #[test]
    fn test_partial_summary() {
        let profile = ExtractedProfile {
            work_experience: set(&["Data Engineer"]),
            ..Default::default()
        };
        assert_eq!(profile.summary(), "Role: Data Engineer");
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = ExtractedProfile {
            years_of_experience: 2,
            technical_skills: set(&["Rust"]),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["yearsOfExperience"], 2);
        assert_eq!(json["technicalSkills"][0], "Rust");
        assert!(json["softSkills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_interview_context() {
        let profile = ExtractedProfile {
            years_of_experience: 3,
            technical_skills: set(&["Swift", "SwiftUI"]),
            projects: set(&["Built a habit tracker app"]),
            ..Default::default()
        };
        assert_eq!(
            build_interview_context(&profile),
            "experience: 3 years\ntechnical skills: Swift, SwiftUI\nprojects: Built a habit tracker app"
        );
        assert_eq!(build_interview_context(&ExtractedProfile::default()), "");
    }
}
