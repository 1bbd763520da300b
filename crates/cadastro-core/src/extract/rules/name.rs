//! Person name detection by line scoring.
//!
//! Every non-label line is scored on shape (word count, capitalisation,
//! share of letters) and on context (position in the text, label on the
//! previous line). The highest-scoring line above [`MIN_NAME_SCORE`] is the
//! name; ties keep the earlier line. When no line qualifies, an inline
//! `Nome: value` is used instead.
//!
//! Lines that look like contact data, documents, addresses or company name
//! labels score zero.

use super::patterns::{
    CEP_LINE, CNPJ_LINE, CPF_LINE, DIGIT_RUN, FANTASY_NAME_PREFIX, LEGAL_NAME_PREFIX, NAME_INLINE,
    NAME_LABEL, PHONE_LINE, SECTION_HEADER, VALUE_LABEL_PREFIX,
};
use super::terms::TermClassifier;
use super::{char_len, fold, lowered};
use crate::extract::NormalizedText;

/// A line must score strictly above this to be taken as a name.
pub const MIN_NAME_SCORE: f64 = 20.0;

const MIN_CHARS: usize = 5;
const MIN_WORDS: usize = 2;
const MIN_LETTER_RATIO: f64 = 0.70;

const WORD_WEIGHT: f64 = 5.0;
const CAPITAL_WEIGHT: f64 = 30.0;
const LETTER_WEIGHT: f64 = 20.0;
const DIGIT_RUN_PENALTY: f64 = 50.0;

const LEADING_LINES: usize = 5;
const LEADING_BONUS: f64 = 15.0;
const SECTION_HEADER_BONUS: f64 = 20.0;
const NAME_LABEL_BONUS: f64 = 50.0;
const VALUE_LABEL_PENALTY: f64 = 100.0;

/// A scored line.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCandidate {
    /// Position of the line in the normalized text.
    pub index: usize,
    /// The trimmed line.
    pub line: String,
    pub score: f64,
}

/// Score the line at `index` as a person name.
///
/// Returns `0.0` for disqualified lines. Scores can go negative when the
/// line follows a value label such as `CPF` or `Telefone`.
pub fn score_name_line(lines: &[String], index: usize, terms: &TermClassifier) -> f64 {
    let Some(line) = lines.get(index).map(|l| l.trim()) else {
        return 0.0;
    };

    let chars = char_len(line);
    let words: Vec<&str> = line.split_whitespace().collect();
    if chars < MIN_CHARS || words.len() < MIN_WORDS {
        return 0.0;
    }

    // Whitespace counts towards the letter share.
    let letters = line
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    let letter_ratio = letters as f64 / chars as f64;
    if letter_ratio < MIN_LETTER_RATIO {
        return 0.0;
    }

    // Company name labels, bare or with their value on the same line.
    let folded = fold(line);
    if LEGAL_NAME_PREFIX.is_match(&folded) || FANTASY_NAME_PREFIX.is_match(&folded) {
        return 0.0;
    }

    if line.contains('@')
        || terms.is_form_label(line)
        || terms.mentions_address_word(line)
        || PHONE_LINE.is_match(line)
        || CPF_LINE.is_match(line)
        || CNPJ_LINE.is_match(line)
        || CEP_LINE.is_match(line)
    {
        return 0.0;
    }

    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    let capital_ratio = capitalized as f64 / words.len() as f64;

    let mut score = WORD_WEIGHT * words.len() as f64
        + CAPITAL_WEIGHT * capital_ratio
        + LETTER_WEIGHT * letter_ratio;

    if DIGIT_RUN.is_match(line) {
        score -= DIGIT_RUN_PENALTY;
    }

    if index < LEADING_LINES {
        score += LEADING_BONUS;
    }

    if index > 0 {
        let previous = lowered(&lines[index - 1]);
        if SECTION_HEADER.is_match(&previous) {
            score += SECTION_HEADER_BONUS;
        } else if NAME_LABEL.is_match(&previous) {
            score += NAME_LABEL_BONUS;
        } else if VALUE_LABEL_PREFIX.is_match(&previous) {
            score -= VALUE_LABEL_PENALTY;
        }
    }

    score
}

/// All lines scoring above [`MIN_NAME_SCORE`], in line order.
pub fn name_candidates(doc: &NormalizedText, terms: &TermClassifier) -> Vec<NameCandidate> {
    doc.lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !terms.is_form_label(line))
        .map(|(index, line)| NameCandidate {
            index,
            line: line.clone(),
            score: score_name_line(&doc.lines, index, terms),
        })
        .filter(|candidate| candidate.score > MIN_NAME_SCORE)
        .collect()
}

/// Extract a person name.
pub fn extract_name(doc: &NormalizedText, terms: &TermClassifier) -> Option<String> {
    let best = name_candidates(doc, terms)
        .into_iter()
        .fold(None::<NameCandidate>, |best, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        });

    if let Some(best) = best {
        return Some(best.line);
    }

    let caps = NAME_INLINE.captures(&doc.text)?;
    let candidate = caps[1].trim();
    let acceptable = !FANTASY_NAME_PREFIX.is_match(&fold(&caps[0]))
        && char_len(candidate) >= MIN_CHARS
        && candidate.split_whitespace().count() >= MIN_WORDS
        && !terms.is_form_label(candidate)
        && !terms.mentions_address_word(candidate);

    acceptable.then(|| candidate.to_string())
}
