//! Rule-based field extractors for Brazilian registration data.
//!
//! Every extractor is a pure function of the normalized text. Most follow a
//! two-tier priority: a label line followed by its value on the next line
//! wins, otherwise an inline pattern over the whole text is tried.

pub mod address;
pub mod company;
pub mod contact;
pub mod documents;
pub mod name;
pub mod patterns;
pub mod postal;
pub mod terms;

pub use address::{
    extract_address_number, extract_city, extract_complement, extract_neighborhood,
    extract_state, extract_street,
};
pub use company::{extract_fantasy_name, extract_legal_name};
pub use contact::{extract_email, extract_phone};
pub use documents::{DocumentNumbers, extract_documents};
pub use name::{NameCandidate, extract_name, name_candidates, score_name_line};
pub use postal::{extract_cep, format_cep};
pub use terms::TermClassifier;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Return the line following the first label line whose value is accepted.
///
/// Label lines whose next line is blank or rejected are skipped and the
/// scan continues.
pub(crate) fn value_after_label(
    lines: &[String],
    is_label: impl Fn(&str) -> bool,
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    lines.windows(2).find_map(|pair| {
        let next = pair[1].trim();
        (is_label(&pair[0]) && !next.is_empty() && accept(next)).then(|| next.to_string())
    })
}

/// Lower-case, strip diacritics and collapse whitespace.
pub(crate) fn fold(line: &str) -> String {
    let stripped: String = line
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cased, trimmed form used by the plain label patterns.
pub(crate) fn lowered(line: &str) -> String {
    line.trim().to_lowercase()
}

pub(crate) fn has_letter(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("  Razão   Social: "), "razao social:");
        assert_eq!(fold("NÚMERO"), "numero");
        assert_eq!(fold("Município"), "municipio");
    }

    #[test]
    fn test_value_after_label_skips_rejected_values() {
        let lines = lines(&["CEP", "abc", "CEP", "01311-000"]);
        let value = value_after_label(&lines, |l| l == "CEP", |v| v.starts_with('0'));
        assert_eq!(value, Some("01311-000".to_string()));
    }

    #[test]
    fn test_value_after_label_ignores_blank_next_line() {
        let lines = lines(&["CEP", "", "01311-000"]);
        assert_eq!(value_after_label(&lines, |l| l == "CEP", |_| true), None);
    }

    #[test]
    fn test_value_after_label_at_end() {
        let lines = lines(&["Nome", "CEP"]);
        assert_eq!(value_after_label(&lines, |l| l == "CEP", |_| true), None);
    }
}
