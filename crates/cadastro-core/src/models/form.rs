//! The structured record produced by the parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Registration form fields extracted from unstructured text.
///
/// A field is set only when positive evidence was found for it, either a
/// direct match in the text or a successful enrichment lookup. Absence is
/// always `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFormData {
    /// Display name: fantasy name, then scored person name, then legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Personal document number (CPF), as found in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Company document number (CNPJ), as found in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal code formatted as `NNNNN-NNN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,

    /// Street / logradouro.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_complement: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter state code (UF), upper-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Razão social.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,

    /// Nome fantasia.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_name: Option<String>,

    /// Additional fields supplied by callers or future extractors.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ExtractedFormData {
    /// Whether no field at all was found.
    pub fn is_empty(&self) -> bool {
        self.filled_fields().is_empty() && self.extra.is_empty()
    }

    /// Names of the populated core fields, in declaration order.
    pub fn filled_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("cpf", &self.cpf),
            ("cnpj", &self.cnpj),
            ("email", &self.email),
            ("phone", &self.phone),
            ("cep", &self.cep),
            ("address", &self.address),
            ("addressNumber", &self.address_number),
            ("addressComplement", &self.address_complement),
            ("neighborhood", &self.neighborhood),
            ("city", &self.city),
            ("state", &self.state),
            ("legalName", &self.legal_name),
            ("fantasyName", &self.fantasy_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(key, _)| key)
        .collect()
    }
}
