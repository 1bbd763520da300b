//! CPF and CNPJ extraction.

use super::patterns::{CNPJ, CPF};
use crate::extract::NormalizedText;

/// Document numbers found in a text. Both may be present at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNumbers {
    /// Personal document number, verbatim.
    pub cpf: Option<String>,
    /// Company document number, verbatim.
    pub cnpj: Option<String>,
}

/// Search the text for a CPF and a CNPJ independently.
pub fn extract_documents(doc: &NormalizedText) -> DocumentNumbers {
    DocumentNumbers {
        cpf: CPF.find(&doc.text).map(|m| m.as_str().to_string()),
        cnpj: CNPJ.find(&doc.text).map(|m| m.as_str().to_string()),
    }
}

/// Digits of a document number, used as lookup key.
pub fn document_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
