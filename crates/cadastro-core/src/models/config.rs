//! Configuration for the parser and its lookup services.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::enrich::brasilapi::{BrasilApiCompany, BrasilApiPostal};
use crate::enrich::{CompanyLookup, PostalLookup};
use crate::error::{CadastroError, Result};

/// Runtime configuration of a [`crate::FormParser`].
///
/// Immutable once handed to the parser. The lookup strategies are the seam
/// through which tests substitute deterministic stubs for network clients.
#[derive(Clone)]
pub struct ParserConfig {
    auto_fetch_postal: bool,
    auto_fetch_company: bool,
    postal_lookup: Arc<dyn PostalLookup>,
    company_lookup: Arc<dyn CompanyLookup>,
    debug: bool,
}

impl ParserConfig {
    /// Create a configuration with both lookups enabled and BrasilAPI clients.
    pub fn new() -> Self {
        Self::from_config(&CadastroConfig::default())
    }

    /// Build runtime configuration from a settings document.
    pub fn from_config(config: &CadastroConfig) -> Self {
        let timeout = Duration::from_secs(config.lookup.timeout_secs);
        Self {
            auto_fetch_postal: config.extraction.auto_fetch_postal,
            auto_fetch_company: config.extraction.auto_fetch_company,
            postal_lookup: Arc::new(BrasilApiPostal::new(&config.lookup.postal_base_url, timeout)),
            company_lookup: Arc::new(BrasilApiCompany::new(
                &config.lookup.company_base_url,
                timeout,
            )),
            debug: config.extraction.debug,
        }
    }

    /// Enable or disable CEP enrichment.
    pub fn with_auto_fetch_postal(mut self, enabled: bool) -> Self {
        self.auto_fetch_postal = enabled;
        self
    }

    /// Enable or disable CNPJ enrichment.
    pub fn with_auto_fetch_company(mut self, enabled: bool) -> Self {
        self.auto_fetch_company = enabled;
        self
    }

    /// Replace the CEP lookup strategy.
    pub fn with_postal_lookup(mut self, lookup: impl PostalLookup + 'static) -> Self {
        self.postal_lookup = Arc::new(lookup);
        self
    }

    /// Replace the CNPJ lookup strategy.
    pub fn with_company_lookup(mut self, lookup: impl CompanyLookup + 'static) -> Self {
        self.company_lookup = Arc::new(lookup);
        self
    }

    /// Enable detection tracing. Never changes extraction results.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn auto_fetch_postal(&self) -> bool {
        self.auto_fetch_postal
    }

    pub fn auto_fetch_company(&self) -> bool {
        self.auto_fetch_company
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn postal_lookup(&self) -> &dyn PostalLookup {
        self.postal_lookup.as_ref()
    }

    pub fn company_lookup(&self) -> &dyn CompanyLookup {
        self.company_lookup.as_ref()
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("auto_fetch_postal", &self.auto_fetch_postal)
            .field("auto_fetch_company", &self.auto_fetch_company)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Settings document for the cadastro pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadastroConfig {
    /// Extraction behaviour.
    pub extraction: ExtractionConfig,

    /// Lookup service endpoints.
    pub lookup: LookupConfig,

    /// Upload validation limits.
    pub image: ImageConfig,
}

/// Extraction behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fill address gaps from the CEP lookup.
    pub auto_fetch_postal: bool,

    /// Fill company gaps from the CNPJ lookup.
    pub auto_fetch_company: bool,

    /// Trace field detection.
    pub debug: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            auto_fetch_postal: true,
            auto_fetch_company: true,
            debug: false,
        }
    }
}

/// Lookup service endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// CEP endpoint; the 8-digit code is appended as a path segment.
    pub postal_base_url: String,

    /// CNPJ endpoint; the 14-digit number is appended as a path segment.
    pub company_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            postal_base_url: "https://brasilapi.com.br/api/cep/v2".to_string(),
            company_base_url: "https://brasilapi.com.br/api/cnpj/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Upload validation limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Maximum file size in bytes.
    pub max_file_size: u64,

    /// Accepted MIME types.
    pub allowed_types: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_types: ["image/jpeg", "image/jpg", "image/png", "image/webp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CadastroConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CadastroError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CadastroError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
