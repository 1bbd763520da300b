//! Gap-filling enrichment from CEP and CNPJ lookups.
//!
//! Enrichment only ever writes into fields that are still empty after
//! extraction. Lookups run one after the other, postal first, so the
//! company pass sees what the postal pass filled.

pub mod brasilapi;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::extract::rules::documents::document_digits;
use crate::extract::rules::format_cep;
use crate::models::config::ParserConfig;
use crate::models::form::ExtractedFormData;
use crate::models::lookup::{CompanyLookupResult, PostalLookupResult, non_blank};

/// Resolves an 8-digit CEP to address data.
#[async_trait]
pub trait PostalLookup: Send + Sync {
    /// Look up a CEP given as digits only. `Ok(None)` means not found.
    async fn lookup(&self, cep: &str) -> Result<Option<PostalLookupResult>, LookupError>;
}

/// Resolves a 14-digit CNPJ to company registry data.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    /// Look up a CNPJ given as digits only. `Ok(None)` means not found.
    async fn lookup(&self, cnpj: &str) -> Result<Option<CompanyLookupResult>, LookupError>;
}

/// Run the enabled lookups and fill empty fields of `data`.
///
/// Never fails: lookup errors are logged and treated as "not found".
pub async fn enrich(data: &mut ExtractedFormData, config: &ParserConfig) {
    if config.auto_fetch_postal() {
        if let Some(cep) = data.cep.as_deref().map(digits) {
            match config.postal_lookup().lookup(&cep).await {
                Ok(Some(result)) => merge_postal(data, &result),
                Ok(None) => debug!("No address found for CEP {}", cep),
                Err(e) => warn!("CEP lookup for {} failed: {}", cep, e),
            }
        }
    }

    if config.auto_fetch_company() {
        if let Some(cnpj) = data.cnpj.as_deref().map(document_digits) {
            match config.company_lookup().lookup(&cnpj).await {
                Ok(Some(result)) => merge_company(data, &result),
                Ok(None) => debug!("No company found for CNPJ {}", cnpj),
                Err(e) => warn!("CNPJ lookup for {} failed: {}", cnpj, e),
            }
        }
    }
}

/// Copy postal lookup values into empty address fields.
pub fn merge_postal(data: &mut ExtractedFormData, result: &PostalLookupResult) {
    fill(&mut data.address, Some(result.street.as_str()));
    fill(&mut data.neighborhood, Some(result.neighborhood.as_str()));
    fill(&mut data.city, Some(result.city.as_str()));
    fill(&mut data.state, Some(result.state.to_uppercase().as_str()));
    fill(&mut data.address_complement, result.complement.as_deref());
}

/// Copy company lookup values into empty fields.
pub fn merge_company(data: &mut ExtractedFormData, result: &CompanyLookupResult) {
    fill(&mut data.legal_name, Some(result.legal_name.as_str()));
    fill(&mut data.fantasy_name, Some(result.fantasy_name.as_str()));
    if data.cep.is_none() {
        data.cep = non_blank(Some(result.cep.as_str()))
            .map(|cep| format_cep(cep).unwrap_or_else(|| cep.to_string()));
    }
    fill(&mut data.address, Some(result.street.as_str()));
    fill(&mut data.address_number, Some(result.number.as_str()));
    fill(&mut data.address_complement, result.complement.as_deref());
    fill(&mut data.neighborhood, Some(result.neighborhood.as_str()));
    fill(&mut data.city, Some(result.city.as_str()));
    fill(&mut data.state, Some(result.state.to_uppercase().as_str()));
    if data.phone.is_none() {
        data.phone = non_blank(result.phone.as_deref())
            .map(digits)
            .filter(|phone| !phone.is_empty());
    }
    fill(&mut data.email, result.contact_email());
}

fn fill(slot: &mut Option<String>, value: Option<&str>) {
    if slot.is_none() {
        *slot = non_blank(value).map(str::to_string);
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
