//! Nome fantasia and razão social extraction.

use regex::Regex;

use super::patterns::{
    FANTASY_NAME_INLINE, FANTASY_NAME_LABEL, FANTASY_NAME_PREFIX, LEGAL_NAME_INLINE,
    LEGAL_NAME_LABEL, LEGAL_NAME_PREFIX, UNRELATED_LABEL_PREFIX,
};
use super::terms::TermClassifier;
use super::{char_len, fold, has_letter, value_after_label};
use crate::extract::NormalizedText;

/// Extract the trade name (nome fantasia).
pub fn extract_fantasy_name(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    company_name(doc, terms, &FANTASY_NAME_LABEL, &LEGAL_NAME_PREFIX, &FANTASY_NAME_INLINE[..])
}

/// Extract the registered legal name (razão social).
pub fn extract_legal_name(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    company_name(doc, terms, &LEGAL_NAME_LABEL, &FANTASY_NAME_PREFIX, &LEGAL_NAME_INLINE[..])
}

fn company_name(
    doc: &NormalizedText,
    terms: &TermClassifier,
    label: &Regex,
    other_label: &Regex,
    inline: &[Regex],
) -> Option<String> {
    let accept = |value: &str| is_company_name(value, terms, other_label);

    value_after_label(&doc.lines, |line| label.is_match(&fold(line)), accept).or_else(|| {
        inline.iter().find_map(|pattern| {
            pattern
                .captures(&doc.text)
                .map(|caps| caps[1].trim().to_string())
                .filter(|candidate| accept(candidate.as_str()))
        })
    })
}

/// At least three characters, some letters, and not itself a label.
fn is_company_name(value: &str, terms: &TermClassifier, other_label: &Regex) -> bool {
    let folded = fold(value);
    char_len(value) >= 3
        && !terms.is_form_label(value)
        && !other_label.is_match(&folded)
        && !UNRELATED_LABEL_PREFIX.is_match(&folded)
        && has_letter(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::normalize;

    fn fantasy(text: &str) -> Option<String> {
        extract_fantasy_name(&normalize(text), &TermClassifier::new())
    }

    fn legal(text: &str) -> Option<String> {
        extract_legal_name(&normalize(text), &TermClassifier::new())
    }

    #[test]
    fn test_fantasy_name_label_lookahead() {
        assert_eq!(fantasy("Nome Fantasia\nPadaria Estrela"), Some("Padaria Estrela".to_string()));
        assert_eq!(fantasy("NOME  FANTASIA:\nEstrela & Cia"), Some("Estrela & Cia".to_string()));
    }

    #[test]
    fn test_fantasy_name_rejects_other_label() {
        assert_eq!(fantasy("Nome Fantasia\nRazão Social\nPadaria Estrela Ltda"), None);
        assert_eq!(fantasy("Nome fantasia\nCNPJ\n12.345.678/0001-95"), None);
    }

    #[test]
    fn test_fantasy_name_inline() {
        assert_eq!(
            fantasy("Empresa\nNome fantasia: Mercado Bom Preço\nCNPJ 12.345.678/0001-95"),
            Some("Mercado Bom Preço".to_string())
        );
    }

    #[test]
    fn test_fantasy_name_requires_letters() {
        assert_eq!(fantasy("Nome Fantasia\n12345"), None);
    }

    #[test]
    fn test_legal_name_diacritic_insensitive() {
        assert_eq!(legal("RAZAO SOCIAL\nPadaria Estrela Ltda"), Some("Padaria Estrela Ltda".to_string()));
        assert_eq!(legal("Razão social:\nPadaria Estrela Ltda"), Some("Padaria Estrela Ltda".to_string()));
    }

    #[test]
    fn test_legal_name_rejects_fantasy_label() {
        assert_eq!(legal("Razão Social\nNome Fantasia\nEstrela"), None);
    }

    #[test]
    fn test_legal_name_inline() {
        assert_eq!(
            legal("Razão Social - Comercial Sul Ltda."),
            Some("Comercial Sul Ltda.".to_string())
        );
    }

    #[test]
    fn test_inline_value_outside_name_characters() {
        assert_eq!(
            legal("Razão Social: Comercial Sul S/A\nCNPJ 12.345.678/0001-95"),
            Some("Comercial Sul S/A".to_string())
        );
        assert_eq!(
            fantasy("Nome fantasia: Padaria Estrela (Matriz)"),
            Some("Padaria Estrela (Matriz)".to_string())
        );
    }
}
