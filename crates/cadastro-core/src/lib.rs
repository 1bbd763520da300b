//! Core library for registration form auto-fill.
//!
//! This crate provides:
//! - Text normalization and label/address term classification
//! - Field extraction (name, CPF/CNPJ, e-mail, phone, CEP and address parts)
//!   from pasted text or OCR output
//! - Name detection by multi-signal line scoring
//! - Gap-filling enrichment through CEP and CNPJ lookups (BrasilAPI by default)
//! - The OCR adapter contract and upload validation

pub mod error;
pub mod models;
pub mod extract;
pub mod enrich;
pub mod ocr;

pub use error::{CadastroError, LookupError, OcrError, Result};
pub use models::config::{CadastroConfig, ParserConfig};
pub use models::form::ExtractedFormData;
pub use models::lookup::{CompanyLookupResult, Officer, PostalLookupResult};
pub use extract::{FormParser, NormalizedText, normalize};
pub use extract::rules::TermClassifier;
pub use enrich::{CompanyLookup, PostalLookup};
pub use enrich::brasilapi::{BrasilApiCompany, BrasilApiPostal};
pub use ocr::{
    ImageFile, ImageValidation, ImageValidationOptions, MockRecognizer, OcrBackend, OcrOptions,
    OcrOutput, validate_image,
};
