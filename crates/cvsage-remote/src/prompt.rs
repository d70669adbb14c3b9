//! Extraction instruction sent to the generative-text service.

use tracing::warn;

/// CV text beyond this many characters is cut before embedding in the prompt.
///
/// Only the remote request is bounded; the heuristic pass always sees the
/// whole text.
pub const MAX_CV_CHARS: usize = 24_000;

/// JSON shape the service is asked to answer with.
pub const RESPONSE_SCHEMA: &str = r#"{
  "technicalSkills": ["string"],
  "softSkills": ["string"],
  "workExperience": ["string"],
  "yearsOfExperience": 0,
  "education": ["string"],
  "certifications": ["string"],
  "projects": ["string"],
  "achievements": ["string"],
  "languages": ["string"],
  "summary": "string"
}"#;

/// Build the natural-language instruction embedding the CV text and schema.
pub fn build_extraction_prompt(cv_text: &str) -> String {
    let (cv_text, truncated) = truncate_chars(cv_text.trim(), MAX_CV_CHARS);
    if truncated {
        warn!(
            "CV text exceeds {} characters; the remote request sees only the first {}",
            MAX_CV_CHARS, MAX_CV_CHARS
        );
    }

    format!(
        r#"You are an expert technical recruiter. Analyze the CV below and extract structured information.

Rules:
- technicalSkills: programming languages, frameworks, databases, cloud and tooling.
- softSkills: interpersonal and organisational skills.
- workExperience: job titles held, without company names or dates.
- yearsOfExperience: total professional experience as a whole number (0 if unknown).
- education: degrees and institutions, one entry per degree.
- certifications: professional certifications, including the year if given.
- projects: short one-line project descriptions.
- achievements: quantifiable accomplishments.
- languages: spoken languages.
- summary: two sentences describing the candidate.
Use empty arrays when nothing applies. Do not invent information.

Respond with JSON only, no markdown and no explanation, in exactly this shape:
{schema}

CV:
"""
{cv}
""""#,
        schema = RESPONSE_SCHEMA,
        cv = cv_text,
    )
}

/// Cut `s` to at most `max_chars` characters; the flag reports whether it was cut.
fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}
