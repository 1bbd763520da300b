//! Line-ending and invisible-character cleanup.

/// Normalized input: the cleaned text plus its individually trimmed lines.
///
/// Blank lines are kept so that line positions match the source layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Whole text with unified line endings, trimmed.
    pub text: String,
    /// Lines of `text`, each trimmed.
    pub lines: Vec<String>,
}

impl NormalizedText {
    /// Line at `index`, or an empty string past the end.
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Normalize raw input. Never fails.
///
/// Converts `\r\n` and lone `\r` to `\n`, strips zero-width characters and
/// byte-order marks, and trims the result.
pub fn normalize(raw: &str) -> NormalizedText {
    let text: String = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !is_invisible(*c))
        .collect();
    let text = text.trim().to_string();

    let lines = text.split('\n').map(|l| l.trim().to_string()).collect();

    NormalizedText { text, lines }
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}
