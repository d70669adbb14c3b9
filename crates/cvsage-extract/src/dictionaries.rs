//! Static CV domain knowledge — skills, roles, education and certification patterns.
//!
//! Extractors only read a [`Dictionary`]; extending any list here changes
//! what is recognized without touching extractor code.

use once_cell::sync::Lazy;
use regex::Regex;

/// Technical skills in canonical casing. Matched as case-insensitive substrings,
/// so short or ambiguous spellings ("Go", "Git", "REST") are spelled out.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "Swift", "Objective-C", "Kotlin", "Java", "JavaScript", "TypeScript", "Python",
    "Rust", "Golang", "C++", "C#", "Ruby", "PHP", "Dart", "SQL", "HTML", "CSS",
    // Frameworks
    "SwiftUI", "UIKit", "RxSwift", "Core Data", "React", "React Native", "Angular",
    "Vue.js", "Node.js", "Express.js", "Next.js", "Django", "Flask", "FastAPI",
    "Spring Boot", "Ruby on Rails", "Flutter", ".NET", "jQuery", "Redux", "Jetpack Compose",
    // APIs
    "GraphQL", "REST API", "RESTful", "gRPC",
    // Datastores
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite", "Firebase", "DynamoDB",
    "Elasticsearch", "Cassandra", "Realm",
    // Cloud / DevOps
    "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes", "Terraform",
    "Ansible", "Jenkins", "GitHub Actions", "CI/CD", "GitHub", "GitLab", "Linux",
    "Kafka", "RabbitMQ", "Xcode", "Android Studio",
    // Data / ML
    "TensorFlow", "PyTorch", "Pandas", "NumPy", "Machine Learning", "Deep Learning",
    "Core ML",
    // Patterns / practice
    "MVVM", "MVC", "VIPER", "Clean Architecture", "Microservices", "Design Patterns",
    "Unit Testing", "TDD", "Agile", "Scrum", "Figma", "Jira",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Teamwork", "Problem Solving", "Critical Thinking",
    "Time Management", "Collaboration", "Adaptability", "Creativity", "Mentoring",
    "Project Management", "Public Speaking", "Negotiation", "Decision Making",
    "Conflict Resolution", "Attention to Detail", "Stakeholder Management",
    "Emotional Intelligence", "Self-motivated", "Presentation",
];

pub const ROLE_TITLES: &[&str] = &[
    "Software Engineer", "Senior Software Engineer", "Software Developer",
    "iOS Developer", "iOS Engineer", "Android Developer", "Mobile Developer",
    "Frontend Developer", "Front-end Developer", "Backend Developer", "Back-end Developer",
    "Full Stack Developer", "Full-Stack Developer", "Web Developer", "DevOps Engineer",
    "Site Reliability Engineer", "Data Scientist", "Data Engineer", "Data Analyst",
    "Machine Learning Engineer", "QA Engineer", "Product Manager", "Project Manager",
    "Engineering Manager", "Tech Lead", "Technical Lead", "Team Lead",
    "Software Architect", "Solutions Architect", "UX Designer", "UI Designer",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "ph.d", "doctorate", "degree", "university",
    "college", "institute", "school", "academy", "gpa", "thesis", "major", "minor",
    "graduated", "graduation", "diploma", "honors", "honours", "cum laude",
    "dean's list", "coursework", "b.sc", "m.sc", "bsc", "msc", "mba",
];

/// Regexes matched per line; any hit adds the whole line.
const EDUCATION_PATTERNS: &[&str] = &[
    r"(?i)\b(?:bachelor|master)(?:'s)?\s+(?:of|in|degree)\b",
    r"(?i)(?:^|[^a-z])(?:b\.?sc|m\.?sc|b\.?eng|m\.?eng|mba|ph\.?d)(?:[^a-z]|$)",
    r"(?i)\b(?:associate(?:'s)?\s+degree|diploma\s+in|doctor\s+of)\b",
    r"(?i)\b(?:university|college|institute|school)\b.*\|\s*(?:19|20)\d{2}",
    r"(?i)\bgpa\b\s*:?\s*\d(?:\.\d{1,2})?",
    r"(?i)\b(?:summa\s+|magna\s+)?cum\s+laude\b|\bdean'?s\s+list\b|\b(?:first[- ]class|with)\s+honou?rs\b",
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified", "certification", "certificate", "license", "licensed",
    "accredited", "credential",
];

/// Vendor-shaped certification regexes; any hit adds the whole line.
const CERTIFICATION_PATTERNS: &[&str] = &[
    r"(?i)\baws\s+certified\b",
    r"(?i)\bgoogle\s+(?:cloud\s+)?certified\b|\bprofessional\s+cloud\s+(?:architect|developer|engineer)\b",
    r"(?i)\bmicrosoft\s+certified\b|\bazure\s+(?:administrator|developer|solutions\s+architect|fundamentals)\b|\baz-\d{3}\b",
    r"(?i)\boracle\s+certified\b|\bocp\b|\boca\b",
    r"(?i)\bcisco\s+certified\b|\bccn[ap]\b|\bccie\b",
    r"(?i)\bcomptia\b",
    r"(?i)\bcertified\s+kubernetes\b|\bck(?:a|ad|s)\b",
    r"(?i)\bpmp\b|\bproject\s+management\s+professional\b",
    r"(?i)\b(?:certified|professional)\s+scrum\s+(?:master|product\s+owner)\b|\bcsm\b|\bpsm\b",
    r"(?i)\bcertified\b.*\(\s*20\d{2}\s*\)",
];

/// Year token required by the keyword+year certification heuristic.
const CERTIFICATION_YEAR: &str = r"\b20[1-2][0-9]\b";

/// Years-of-experience patterns in priority order. Capture group 1 is the number.
///
/// The number must not follow a digit or a dot, so `1.5 years` yields its
/// whole part instead of the fraction digits.
const YEARS_PATTERNS: &[&str] = &[
    r"(?:^|[^\d.])(\d+)(?:\.\d+)?\+?\s*years?\s+of\s+experience",
    r"(?:^|[^\d.])(\d+)(?:\.\d+)?\+?\s*years?\s+experience",
    r"experience[^\n]*?[^\d.](\d+)(?:\.\d+)?\+?\s*years?",
    r"(?:^|[^\d.])(\d+)(?:\.\d+)?\+?\s*(?:yrs?|years?)\b",
];

pub const PROJECT_TERMS: &[&str] = &[
    "app", "platform", "system", "project", "built", "developed", "created",
];

pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "increased", "improved", "reduced", "achieved", "led", "won", "awarded",
    "generated", "saved", "optimized", "launched", "delivered", "mentored",
    "published", "featured", "speaker", "recognized",
];

pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

pub const SPOKEN_LANGUAGES: &[&str] = &[
    "English", "Spanish", "French", "German", "Italian", "Portuguese", "Mandarin",
    "Cantonese", "Chinese", "Japanese", "Korean", "Arabic", "Hindi", "Russian",
    "Dutch", "Turkish", "Urdu", "Bengali", "Polish", "Swedish", "Vietnamese",
];

/// Words that mark a line as talking about spoken languages.
pub const LANGUAGE_MARKERS: &[&str] = &[
    "language", "languages", "fluent", "native", "bilingual", "proficient",
    "conversational",
];

/// All lookup data the heuristic extractors consume.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub role_titles: Vec<String>,
    pub education_keywords: Vec<String>,
    pub education_patterns: Vec<Regex>,
    pub certification_keywords: Vec<String>,
    pub certification_patterns: Vec<Regex>,
    pub certification_year: Regex,
    pub years_patterns: Vec<Regex>,
    pub project_terms: Vec<String>,
    pub achievement_verbs: Vec<String>,
    pub bullet_markers: Vec<char>,
    pub spoken_languages: Vec<String>,
    pub language_markers: Vec<String>,
}

static DEFAULT_CV: Lazy<Dictionary> = Lazy::new(Dictionary::default);

impl Dictionary {
    /// Shared, process-wide CV dictionary.
    pub fn default_cv() -> &'static Dictionary {
        &DEFAULT_CV
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self {
            technical_skills: owned(TECHNICAL_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            role_titles: owned(ROLE_TITLES),
            education_keywords: owned(EDUCATION_KEYWORDS),
            education_patterns: compile(EDUCATION_PATTERNS),
            certification_keywords: owned(CERTIFICATION_KEYWORDS),
            certification_patterns: compile(CERTIFICATION_PATTERNS),
            certification_year: Regex::new(CERTIFICATION_YEAR).unwrap(),
            years_patterns: compile(YEARS_PATTERNS),
            project_terms: owned(PROJECT_TERMS),
            achievement_verbs: owned(ACHIEVEMENT_VERBS),
            bullet_markers: BULLET_MARKERS.to_vec(),
            spoken_languages: owned(SPOKEN_LANGUAGES),
            language_markers: owned(LANGUAGE_MARKERS),
        }
    }
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

// Patterns are compile-time constants; a bad one is a programming error.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_dictionary_compiles() {
        let dict = Dictionary::default_cv();
        assert_eq!(dict.education_patterns.len(), EDUCATION_PATTERNS.len());
        assert_eq!(dict.certification_patterns.len(), CERTIFICATION_PATTERNS.len());
        assert_eq!(dict.years_patterns.len(), YEARS_PATTERNS.len());
    }

    #[test]
    fn test_term_lists_have_no_case_duplicates() {
        for list in [TECHNICAL_SKILLS, SOFT_SKILLS, ROLE_TITLES] {
            let mut seen = HashSet::new();
            for term in list {
                assert!(seen.insert(term.to_lowercase()), "duplicate term {}", term);
            }
        }
    }

    #[test]
    fn test_dictionary_sizes() {
        assert!((60..=90).contains(&TECHNICAL_SKILLS.len()));
        assert_eq!(SOFT_SKILLS.len(), 20);
        assert!(ROLE_TITLES.len() >= 25);
        assert_eq!(ACHIEVEMENT_VERBS.len(), 17);
    }
}
