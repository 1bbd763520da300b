//! Postal code (CEP) extraction.

use super::patterns::{CEP_BARE, CEP_DIGITS, CEP_LABEL, CEP_LABELED, CEP_LINE};
use super::{lowered, value_after_label};
use crate::extract::NormalizedText;

/// Extract a CEP formatted as `NNNNN-NNN`.
///
/// A `CEP` label line followed by a code on the next line wins. Otherwise the
/// text is searched for a labeled code, then a bare `NNNNN-NNN` token, then a
/// bare 8-digit run.
pub fn extract_cep(doc: &NormalizedText) -> Option<String> {
    let labeled = value_after_label(
        &doc.lines,
        |line| CEP_LABEL.is_match(&lowered(line)),
        |next| CEP_LINE.is_match(next),
    );
    if let Some(code) = labeled {
        return format_cep(&code);
    }

    [&*CEP_LABELED, &*CEP_BARE, &*CEP_DIGITS]
        .iter()
        .find_map(|pattern| pattern.captures(&doc.text))
        .and_then(|caps| format_cep(&caps[1]))
}

/// Reformat any 8-digit code as `NNNNN-NNN`.
pub fn format_cep(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == 8).then(|| format!("{}-{}", &digits[..5], &digits[5..]))
}
