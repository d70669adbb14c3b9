//! Locate, parse and validate the JSON object embedded in a provider reply.

use std::collections::BTreeSet;

use cvsage_extract::{ExtractedProfile, MAX_PLAUSIBLE_YEARS};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::RemoteExtractionError;

/// Profile fields as the service returns them.
///
/// The eight profile fields are required; `languages` may be omitted. Unknown
/// fields (including the service's own `summary`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePayload {
    technical_skills: Vec<String>,
    soft_skills: Vec<String>,
    work_experience: Vec<String>,
    #[serde(deserialize_with = "lenient_years")]
    years_of_experience: u32,
    education: Vec<String>,
    certifications: Vec<String>,
    projects: Vec<String>,
    achievements: Vec<String>,
    #[serde(default)]
    languages: Vec<String>,
}

/// Slice from the first `{` to the last `}`, inclusive.
///
/// Nested braces inside string values or several objects in one reply can
/// defeat this; the slice then fails to parse and is reported as malformed.
pub fn slice_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse a provider reply into a profile.
pub fn parse_profile(raw: &str) -> Result<ExtractedProfile, RemoteExtractionError> {
    if raw.trim().is_empty() {
        return Err(RemoteExtractionError::EmptyResponse);
    }

    let json = slice_json(raw).ok_or_else(|| {
        RemoteExtractionError::MalformedPayload("No JSON object in response".into())
    })?;

    let payload: RemotePayload = serde_json::from_str(json)
        .map_err(|e| RemoteExtractionError::MalformedPayload(e.to_string()))?;

    Ok(ExtractedProfile {
        technical_skills: clean(payload.technical_skills),
        soft_skills: clean(payload.soft_skills),
        work_experience: clean(payload.work_experience),
        years_of_experience: payload.years_of_experience,
        education: clean(payload.education),
        certifications: clean(payload.certifications),
        projects: clean(payload.projects),
        achievements: clean(payload.achievements),
        languages: clean(payload.languages),
    })
}

/// Trim, drop blanks, deduplicate and sort.
fn clean(values: Vec<String>) -> BTreeSet<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Accepts `5`, `5.5`, `"5"`, `"5+"` and `null`; negatives clamp to 0.
///
/// Values above [`MAX_PLAUSIBLE_YEARS`] become 0, as on the heuristic path.
fn lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let years = match &value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<f64>().map_err(|_| {
                serde::de::Error::custom(format!("invalid yearsOfExperience '{}'", s))
            })?
        }
        other => {
            return Err(serde::de::Error::custom(format!(
                "invalid yearsOfExperience {}",
                other
            )))
        }
    };
    let years = years.max(0.0).min(u32::MAX as f64) as u32;
    Ok(if years > MAX_PLAUSIBLE_YEARS { 0 } else { years })
}
