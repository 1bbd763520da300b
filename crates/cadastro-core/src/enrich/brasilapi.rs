//! BrasilAPI clients for CEP and CNPJ lookups.
//!
//! <https://brasilapi.com.br/docs>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{CompanyLookup, PostalLookup};
use crate::error::LookupError;
use crate::models::lookup::{CompanyLookupResult, Officer, PostalLookupResult};

/// CEP lookup against `GET {base_url}/{cep}`.
#[derive(Debug, Clone)]
pub struct BrasilApiPostal {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BrasilApiPostal {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch the address for an 8-digit CEP. A 404 is `Ok(None)`.
    pub async fn fetch(&self, cep: &str) -> Result<Option<PostalLookupResult>, LookupError> {
        let cep = digits_of_length(cep, 8)?;
        let url = format!("{}/{}", self.base_url, cep);
        let body = get(&self.client, &url, self.timeout).await?;
        body.map(|body| parse_postal(&body)).transpose()
    }
}

/// CNPJ lookup against `GET {base_url}/{cnpj}`.
#[derive(Debug, Clone)]
pub struct BrasilApiCompany {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BrasilApiCompany {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch registry data for a 14-digit CNPJ. A 404 is `Ok(None)`.
    pub async fn fetch(&self, cnpj: &str) -> Result<Option<CompanyLookupResult>, LookupError> {
        let cnpj = digits_of_length(cnpj, 14)?;
        let url = format!("{}/{}", self.base_url, cnpj);
        let body = get(&self.client, &url, self.timeout).await?;
        body.map(|body| parse_company(&body)).transpose()
    }
}

#[async_trait]
impl PostalLookup for BrasilApiPostal {
    async fn lookup(&self, cep: &str) -> Result<Option<PostalLookupResult>, LookupError> {
        Ok(self.fetch(cep).await.unwrap_or_else(|e| {
            warn!("CEP lookup failed: {}", e);
            None
        }))
    }
}

#[async_trait]
impl CompanyLookup for BrasilApiCompany {
    async fn lookup(&self, cnpj: &str) -> Result<Option<CompanyLookupResult>, LookupError> {
        Ok(self.fetch(cnpj).await.unwrap_or_else(|e| {
            warn!("CNPJ lookup failed: {}", e);
            None
        }))
    }
}

/// GET `url`, returning the body on success and `None` on 404.
async fn get(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Option<String>, LookupError> {
    debug!("GET {}", url);
    let response = client.get(url).timeout(timeout).send().await?;

    match response.status() {
        StatusCode::NOT_FOUND => Ok(None),
        status if status.is_success() => Ok(Some(response.text().await?)),
        status => Err(LookupError::Status(status.as_u16())),
    }
}

fn digits_of_length(key: &str, len: usize) -> Result<String, LookupError> {
    let digits: String = key.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == len {
        Ok(digits)
    } else {
        Err(LookupError::InvalidKey(key.to_string()))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct CepPayload {
    street: Option<String>,
    neighborhood: Option<String>,
    city: Option<String>,
    state: Option<String>,
    complement: Option<String>,
    complemento: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CnpjPayload {
    razao_social: Option<String>,
    nome_fantasia: Option<String>,
    cep: Option<String>,
    logradouro: Option<String>,
    numero: Option<String>,
    complemento: Option<String>,
    bairro: Option<String>,
    municipio: Option<String>,
    uf: Option<String>,
    ddd_telefone_1: Option<String>,
    email: Option<String>,
    qsa: Option<Vec<PartnerPayload>>,
}

#[derive(Debug, Deserialize)]
struct PartnerPayload {
    nome_socio: Option<String>,
    email: Option<String>,
}

/// Decode a `/cep/v2` response body.
pub fn parse_postal(body: &str) -> Result<PostalLookupResult, LookupError> {
    let payload: CepPayload = decode(body)?;
    Ok(PostalLookupResult {
        street: payload.street.unwrap_or_default(),
        neighborhood: payload.neighborhood.unwrap_or_default(),
        city: payload.city.unwrap_or_default(),
        state: payload.state.unwrap_or_default(),
        complement: present(payload.complement).or_else(|| present(payload.complemento)),
    })
}

/// Decode a `/cnpj/v1` response body.
pub fn parse_company(body: &str) -> Result<CompanyLookupResult, LookupError> {
    let payload: CnpjPayload = decode(body)?;
    Ok(CompanyLookupResult {
        legal_name: payload.razao_social.unwrap_or_default(),
        fantasy_name: payload.nome_fantasia.unwrap_or_default(),
        cep: payload.cep.unwrap_or_default(),
        street: payload.logradouro.unwrap_or_default(),
        number: payload.numero.unwrap_or_default(),
        complement: present(payload.complemento),
        neighborhood: payload.bairro.unwrap_or_default(),
        city: payload.municipio.unwrap_or_default(),
        state: payload.uf.unwrap_or_default(),
        phone: present(payload.ddd_telefone_1),
        email: present(payload.email),
        officers: payload
            .qsa
            .unwrap_or_default()
            .into_iter()
            .map(|partner| Officer {
                name: present(partner.nome_socio),
                email: present(partner.email),
            })
            .collect(),
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
