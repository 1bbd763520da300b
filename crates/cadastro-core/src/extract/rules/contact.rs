//! E-mail and phone extraction.

use super::patterns::{CNPJ_FORMATTED, CPF_FORMATTED, EMAIL, PHONE_TOKEN};
use crate::extract::NormalizedText;

/// Shortest and longest digit strings accepted as a phone number
/// (area code + local number, optionally with country code).
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=13;

/// Extract the first e-mail address, verbatim.
pub fn extract_email(doc: &NormalizedText) -> Option<String> {
    EMAIL.find(&doc.text).map(|m| m.as_str().to_string())
}

/// Extract a phone number as a digit string.
///
/// Lines are tried in order and lines carrying a formatted CPF or CNPJ are
/// skipped. On each line the first phone-shaped token is used, falling back
/// to all of the line's digits. The first result holding 10 to 13 digits
/// wins.
pub fn extract_phone(doc: &NormalizedText) -> Option<String> {
    doc.lines
        .iter()
        .filter(|line| !CPF_FORMATTED.is_match(line) && !CNPJ_FORMATTED.is_match(line))
        .find_map(|line| {
            let token = PHONE_TOKEN.find(line).map(|m| digits(m.as_str()));
            token
                .filter(|d| PHONE_DIGITS.contains(&d.len()))
                .or_else(|| Some(digits(line)).filter(|d| PHONE_DIGITS.contains(&d.len())))
        })
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
