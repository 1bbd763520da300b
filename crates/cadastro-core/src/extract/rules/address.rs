//! Street address extraction: logradouro, número, complemento, bairro,
//! cidade and UF.
//!
//! Each field tries a label line followed by its value first, then an
//! inline pattern over the whole text.

use super::patterns::{
    CITY_INLINE, CITY_LABEL, COMPLEMENT_INLINE, COMPLEMENT_LABEL, NEIGHBORHOOD_INLINE,
    NEIGHBORHOOD_LABEL, NUMBER_INLINE, NUMBER_LABEL, NUMBER_VALUE, STATE_BARE, STATE_CODE_LINE,
    STATE_LABEL, STATE_LABELED, STATE_VALUE, STREET_INLINE,
};
use super::terms::TermClassifier;
use super::{char_len, fold, has_letter, lowered, value_after_label};
use crate::extract::NormalizedText;

/// Extract the street (logradouro).
///
/// Inline matches keep the street-type word, e.g. `Avenida Paulista`.
pub fn extract_street(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    let labeled = value_after_label(
        &doc.lines,
        |line| {
            let folded = fold(line);
            folded.contains("rua") && folded.contains("logradouro")
        },
        |next| char_len(next) >= 3 && !terms.is_form_label(next) && has_letter(next),
    );
    if labeled.is_some() {
        return labeled;
    }

    STREET_INLINE.iter().find_map(|pattern| {
        let caps = pattern.captures(&doc.text)?;
        let candidate = caps[1].trim();
        (char_len(candidate) >= 5 && !terms.is_form_label(candidate))
            .then(|| candidate.to_string())
    })
}

/// Extract the house number: 1 to 5 digits with an optional letter.
pub fn extract_address_number(doc: &NormalizedText) -> Option<String> {
    value_after_label(
        &doc.lines,
        |line| NUMBER_LABEL.is_match(&lowered(line)),
        |next| NUMBER_VALUE.is_match(next),
    )
    .or_else(|| {
        NUMBER_INLINE
            .captures(&doc.text)
            .map(|caps| caps[1].to_string())
    })
}

/// Extract the complement (apartment, block, room).
pub fn extract_complement(doc: &NormalizedText) -> Option<String> {
    value_after_label(
        &doc.lines,
        |line| COMPLEMENT_LABEL.is_match(&lowered(line)),
        |next| char_len(next) >= 3,
    )
    .or_else(|| {
        COMPLEMENT_INLINE
            .iter()
            .find_map(|pattern| pattern.find(&doc.text))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Extract the neighborhood (bairro or distrito).
pub fn extract_neighborhood(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    value_after_label(
        &doc.lines,
        |line| NEIGHBORHOOD_LABEL.is_match(&lowered(line)),
        |next| char_len(next) >= 3 && !terms.is_form_label(next),
    )
    .or_else(|| inline_value(&NEIGHBORHOOD_INLINE, doc))
}

/// Extract the city (cidade or município).
pub fn extract_city(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    value_after_label(
        &doc.lines,
        |line| CITY_LABEL.is_match(&lowered(line)),
        |next| !terms.is_form_label(next) && !STATE_CODE_LINE.is_match(next),
    )
    .or_else(|| inline_value(&CITY_INLINE, doc))
}

/// Extract the two-letter state code, upper-cased.
///
/// The last fallback takes the first standalone pair of capitals anywhere
/// in the text, so an unlabeled `SP` is found but so is any other
/// two-letter acronym that comes first.
pub fn extract_state(doc: &NormalizedText) -> Option<String> {
    value_after_label(
        &doc.lines,
        |line| STATE_LABEL.is_match(&lowered(line)),
        |next| STATE_VALUE.is_match(next),
    )
    .or_else(|| {
        [&*STATE_LABELED, &*STATE_BARE]
            .iter()
            .find_map(|pattern| pattern.captures(&doc.text))
            .map(|caps| caps[1].to_string())
    })
    .map(|code| code.to_uppercase())
}

fn inline_value(pattern: &regex::Regex, doc: &NormalizedText) -> Option<String> {
    pattern
        .captures(&doc.text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::normalize;
    use pretty_assertions::assert_eq;

    fn terms() -> TermClassifier {
        TermClassifier::new()
    }

    fn doc(text: &str) -> NormalizedText {
        normalize(text)
    }

    #[test]
    fn test_street_label_lookahead() {
        let text = "Rua / Logradouro\nAvenida Ipiranga\nNúmero\n6681";
        assert_eq!(
            extract_street(&doc(text), &terms()),
            Some("Avenida Ipiranga".to_string())
        );
    }

    #[test]
    fn test_street_label_rejects_label_value() {
        // Next line is a label; falls through to the inline pattern.
        let text = "Rua / Logradouro\nNúmero\nmoro na Rua das Flores, 120";
        assert_eq!(
            extract_street(&doc(text), &terms()),
            Some("Rua das Flores".to_string())
        );
    }

    #[test]
    fn test_street_inline_avenue() {
        let text = "Endereço: Avenida Paulista, 1000\nSão Paulo";
        assert_eq!(
            extract_street(&doc(text), &terms()),
            Some("Avenida Paulista".to_string())
        );
    }

    #[test]
    fn test_street_absent() {
        assert_eq!(extract_street(&doc("Maria Souza\nmaria@x.com"), &terms()), None);
    }

    #[test]
    fn test_number_label_lookahead() {
        assert_eq!(extract_address_number(&doc("Nº\n45B")), Some("45B".to_string()));
        assert_eq!(extract_address_number(&doc("Número:\n1578")), Some("1578".to_string()));
    }

    #[test]
    fn test_number_label_rejects_long_value() {
        assert_eq!(extract_address_number(&doc("Número\n123456")), None);
    }

    #[test]
    fn test_number_inline() {
        assert_eq!(
            extract_address_number(&doc("Rua Augusta, 1500, Consolação")),
            Some("1500".to_string())
        );
        assert_eq!(
            extract_address_number(&doc("Avenida Brasil, 77")),
            Some("77".to_string())
        );
    }

    #[test]
    fn test_complement_label_lookahead() {
        assert_eq!(
            extract_complement(&doc("Complemento\nFundos")),
            Some("Fundos".to_string())
        );
        // Too short, nothing inline either.
        assert_eq!(extract_complement(&doc("Complemento\nA")), None);
    }

    #[test]
    fn test_complement_inline_patterns() {
        assert_eq!(
            extract_complement(&doc("Rua X, 10, Torre 2 Apto 31")),
            Some("Torre 2 Apto 31".to_string())
        );
        assert_eq!(
            extract_complement(&doc("Rua X, 10 apto 12")),
            Some("apto 12".to_string())
        );
        assert_eq!(
            extract_complement(&doc("Condomínio Sol, Bloco C")),
            Some("Bloco C".to_string())
        );
    }

    #[test]
    fn test_neighborhood() {
        assert_eq!(
            extract_neighborhood(&doc("Bairro / Distrito\nBela Vista"), &terms()),
            Some("Bela Vista".to_string())
        );
        assert_eq!(
            extract_neighborhood(&doc("Bairro: Jardim América, São Paulo"), &terms()),
            Some("Jardim América".to_string())
        );
    }

    #[test]
    fn test_neighborhood_label_followed_by_label() {
        assert_eq!(
            extract_neighborhood(&doc("Bairro\nCidade"), &terms()),
            None
        );
    }

    #[test]
    fn test_city_label_lookahead() {
        assert_eq!(
            extract_city(&doc("Cidade\nCampinas\nUF\nSP"), &terms()),
            Some("Campinas".to_string())
        );
    }

    #[test]
    fn test_city_label_skips_state_code() {
        // A state code is not a city; the inline pattern finds nothing either.
        assert_eq!(extract_city(&doc("Município\nSP"), &terms()), None);
    }

    #[test]
    fn test_city_inline() {
        assert_eq!(
            extract_city(&doc("Cidade: Ribeirão Preto - SP"), &terms()),
            Some("Ribeirão Preto".to_string())
        );
        assert_eq!(
            extract_city(&doc("Município: Embu-Guaçu/SP"), &terms()),
            Some("Embu-Guaçu".to_string())
        );
    }

    #[test]
    fn test_state_label_lookahead() {
        assert_eq!(extract_state(&doc("UF / Estado\nrj")), Some("RJ".to_string()));
        assert_eq!(extract_state(&doc("Estado:\nMG")), Some("MG".to_string()));
    }

    #[test]
    fn test_state_inline() {
        assert_eq!(extract_state(&doc("Cidade: Curitiba, UF: pr")), Some("PR".to_string()));
        assert_eq!(extract_state(&doc("Curitiba - PR")), Some("PR".to_string()));
    }

    #[test]
    fn test_state_bare_fallback_takes_first_acronym() {
        // Known limitation: any earlier two-capital token wins.
        assert_eq!(
            extract_state(&doc("Loja TI Centro\nCuritiba PR")),
            Some("TI".to_string())
        );
    }

    #[test]
    fn test_state_ignores_three_letter_labels() {
        assert_eq!(extract_state(&doc("CEP 01311-000\nCPF 123.456.789-09")), None);
    }
}
