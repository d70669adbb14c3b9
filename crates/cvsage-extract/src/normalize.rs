//! Text normalization — lowercase full text plus aligned line views.

/// Normalized view over raw CV text.
///
/// `lines` and `lower_lines` are index-aligned: `lower_lines[i]` is the
/// lowercase form of `lines[i]`. Blank lines are kept (as empty strings) so
/// positions stay meaningful; use [`NormalizedText::non_blank_lines`] to skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    lower: String,
    lines: Vec<String>,
    lower_lines: Vec<String>,
}

/// Normalize raw text. Never fails; empty input gives empty views.
pub fn normalize(raw: &str) -> NormalizedText {
    let lines: Vec<String> = raw.lines().map(|l| l.trim().to_string()).collect();
    let lower_lines = lines.iter().map(|l| l.to_lowercase()).collect();

    NormalizedText {
        lower: raw.to_lowercase(),
        lines,
        lower_lines,
    }
}

impl NormalizedText {
    /// Full text, lowercased.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Trimmed original-case lines, blank lines included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Trimmed lowercase lines, aligned with [`NormalizedText::lines`].
    pub fn lower_lines(&self) -> &[String] {
        &self.lower_lines
    }

    /// `(original, lowercase)` pairs for every non-blank line.
    pub fn non_blank_lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines
            .iter()
            .zip(self.lower_lines.iter())
            .filter(|(line, _)| !line.is_empty())
            .map(|(line, lower)| (line.as_str(), lower.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.lower.trim().is_empty()
    }
}
