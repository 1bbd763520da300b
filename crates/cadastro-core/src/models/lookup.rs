//! Payloads returned by the CEP and CNPJ lookup services.

use serde::{Deserialize, Serialize};

/// Address data for a postal code (CEP).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalLookupResult {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

/// Company registry data for a CNPJ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLookupResult {
    pub legal_name: String,
    pub fantasy_name: String,
    pub cep: String,
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Partners and administrators (quadro de sócios).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub officers: Vec<Officer>,
}

/// A member of the officer roster of a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CompanyLookupResult {
    /// The company e-mail, or the first officer e-mail when the company has none.
    pub fn contact_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref()).or_else(|| {
            self.officers
                .iter()
                .find_map(|officer| non_blank(officer.email.as_deref()))
        })
    }
}

/// Treat blank strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
