//! Form parser facade: normalization, field extraction, enrichment.

use std::time::Instant;

use tracing::{debug, info};

use crate::enrich;
use crate::error::{CadastroError, Result};
use crate::models::config::ParserConfig;
use crate::models::form::ExtractedFormData;
use crate::ocr::{ImageFile, ImageValidationOptions, OcrBackend, OcrOptions, OcrOutput, validate_image};

use super::normalize::{NormalizedText, normalize};
use super::rules::{
    TermClassifier, extract_address_number, extract_cep, extract_city, extract_complement,
    extract_documents, extract_email, extract_fantasy_name, extract_legal_name, extract_name,
    extract_neighborhood, extract_phone, extract_state, extract_street, name_candidates,
};

/// Turns pasted or OCR text into [`ExtractedFormData`].
///
/// Holds configuration only. A single parser can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct FormParser {
    config: ParserConfig,
    terms: TermClassifier,
    image_options: ImageValidationOptions,
    ocr_options: OcrOptions,
}

impl FormParser {
    /// Create a parser with the built-in term tables.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            terms: TermClassifier::new(),
            image_options: ImageValidationOptions::default(),
            ocr_options: OcrOptions::default(),
        }
    }

    /// Use a custom term classifier.
    pub fn with_terms(mut self, terms: TermClassifier) -> Self {
        self.terms = terms;
        self
    }

    /// Set upload limits for [`FormParser::parse_image`].
    pub fn with_image_validation(mut self, options: ImageValidationOptions) -> Self {
        self.image_options = options;
        self
    }

    /// Set OCR options for [`FormParser::parse_image`].
    pub fn with_ocr_options(mut self, options: OcrOptions) -> Self {
        self.ocr_options = options;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Run every field extractor over normalized text. No lookups.
    ///
    /// The display name is the fantasy name, then the scored person name,
    /// then the legal name.
    pub fn extract(&self, doc: &NormalizedText) -> ExtractedFormData {
        let terms = &self.terms;

        let email = extract_email(doc);
        let phone = extract_phone(doc);
        let documents = extract_documents(doc);
        let person_name = extract_name(doc, terms);
        let fantasy_name = extract_fantasy_name(doc, terms);
        let legal_name = extract_legal_name(doc, terms);
        let cep = extract_cep(doc);
        let address = extract_street(doc, terms);
        let address_number = extract_address_number(doc);
        let address_complement = extract_complement(doc);
        let neighborhood = extract_neighborhood(doc, terms);
        let city = extract_city(doc, terms);
        let state = extract_state(doc);

        if self.config.debug() {
            for candidate in name_candidates(doc, terms) {
                debug!(
                    "Name candidate line {}: {:?} (score {:.1})",
                    candidate.index, candidate.line, candidate.score
                );
            }
        }

        let name = fantasy_name
            .clone()
            .or(person_name)
            .or_else(|| legal_name.clone());

        ExtractedFormData {
            name,
            cpf: documents.cpf,
            cnpj: documents.cnpj,
            email,
            phone,
            cep,
            address,
            address_number,
            address_complement,
            neighborhood,
            city,
            state,
            legal_name,
            fantasy_name,
            ..Default::default()
        }
    }

    /// Parse text and fill gaps from the configured lookups.
    ///
    /// Never fails because a field is missing or a lookup failed.
    pub async fn parse(&self, text: &str) -> ExtractedFormData {
        let start = Instant::now();
        let doc = normalize(text);

        if self.config.debug() {
            debug!("Parsing {} chars in {} lines", doc.text.len(), doc.lines.len());
        }

        let mut data = self.extract(&doc);
        enrich::enrich(&mut data, &self.config).await;

        if self.config.debug() {
            debug!("Extracted fields: {:?}", data.filled_fields());
        }
        info!(
            "Parsed form: {} fields in {}ms",
            data.filled_fields().len(),
            start.elapsed().as_millis()
        );

        data
    }

    /// Parse raw bytes, which must be UTF-8 text.
    pub async fn parse_bytes(&self, bytes: &[u8]) -> Result<ExtractedFormData> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CadastroError::InvalidInput(format!("input is not UTF-8 text: {}", e)))?;
        Ok(self.parse(text).await)
    }

    /// Parse the text of an OCR result.
    pub async fn parse_ocr(&self, output: &OcrOutput) -> ExtractedFormData {
        debug!(
            "OCR text with {} blocks, confidence {:.1}",
            output.blocks.len(),
            output.confidence
        );
        self.parse(&output.text).await
    }

    /// Validate an uploaded image, run OCR on it and parse the result.
    pub async fn parse_image(
        &self,
        backend: &dyn OcrBackend,
        file: &ImageFile,
        bytes: &[u8],
    ) -> Result<ExtractedFormData> {
        let verdict = validate_image(file, &self.image_options);
        if !verdict.valid {
            return Err(CadastroError::ImageRejected(verdict.error.unwrap_or_default()));
        }

        let output = backend.recognize(bytes, &self.ocr_options).await?;
        Ok(self.parse_ocr(&output).await)
    }
}

impl Default for FormParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LookupError, OcrError};
    use crate::models::lookup::{CompanyLookupResult, PostalLookupResult};
    use crate::ocr::MockRecognizer;
    use crate::{CompanyLookup, PostalLookup};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct NoCompany;

    #[async_trait]
    impl CompanyLookup for NoCompany {
        async fn lookup(&self, _cnpj: &str) -> std::result::Result<Option<CompanyLookupResult>, LookupError> {
            Ok(None)
        }
    }

    struct FixedPostal;

    #[async_trait]
    impl PostalLookup for FixedPostal {
        async fn lookup(&self, _cep: &str) -> std::result::Result<Option<PostalLookupResult>, LookupError> {
            Ok(Some(PostalLookupResult {
                street: "Avenida Paulista".to_string(),
                neighborhood: "Bela Vista".to_string(),
                city: "São Paulo".to_string(),
                state: "sp".to_string(),
                complement: None,
            }))
        }
    }

    struct BrokenOcr;

    #[async_trait]
    impl OcrBackend for BrokenOcr {
        async fn recognize(&self, _image: &[u8], _options: &OcrOptions) -> std::result::Result<OcrOutput, OcrError> {
            Err(OcrError::Engine("no engine".to_string()))
        }
    }

    fn offline() -> FormParser {
        FormParser::new(
            ParserConfig::new()
                .with_auto_fetch_postal(false)
                .with_auto_fetch_company(false),
        )
    }

    #[test]
    fn test_extract_person_form() {
        let text = "Cliente\nMaria Fernanda Souza\nmaria.souza@example.com\n(11) 98888-7777\nCEP\n01311-000";
        let data = offline().extract(&normalize(text));

        assert_eq!(data.name.as_deref(), Some("Maria Fernanda Souza"));
        assert_eq!(data.email.as_deref(), Some("maria.souza@example.com"));
        assert_eq!(data.phone.as_deref(), Some("11988887777"));
        assert_eq!(data.cep.as_deref(), Some("01311-000"));
        assert_eq!(data.fantasy_name, None);
        assert_eq!(data.legal_name, None);
    }

    #[test]
    fn test_fantasy_name_takes_priority() {
        let text = "Razão Social\nPadaria Estrela Ltda\nNome Fantasia\nPadaria Estrela\nContato\nJoão Pedro Lima";
        let data = offline().extract(&normalize(text));

        assert_eq!(data.fantasy_name.as_deref(), Some("Padaria Estrela"));
        assert_eq!(data.legal_name.as_deref(), Some("Padaria Estrela Ltda"));
        assert_eq!(data.name.as_deref(), Some("Padaria Estrela"));
    }

    #[test]
    fn test_legal_name_is_last_resort() {
        let text = "razão social: padaria 2000 ltda\nCNPJ: 12.345.678/0001-95";
        let data = offline().extract(&normalize(text));

        assert_eq!(data.legal_name.as_deref(), Some("padaria 2000 ltda"));
        assert_eq!(data.name.as_deref(), Some("padaria 2000 ltda"));
        assert_eq!(data.cnpj.as_deref(), Some("12.345.678/0001-95"));
    }

    #[test]
    fn test_legal_name_label_on_its_own_line() {
        let parser = offline();
        for (text, legal) in [
            ("Razão Social\nPadaria Estrela Ltda\nCNPJ\n12.345.678/0001-95", "Padaria Estrela Ltda"),
            ("Razão Social\nACME Ltda\nCNPJ\n12.345.678/0001-95", "ACME Ltda"),
            ("Razão Social: Comercial Sul S/A\nCNPJ 12.345.678/0001-95", "Comercial Sul S/A"),
        ] {
            let data = parser.extract(&normalize(text));
            assert_eq!(data.legal_name.as_deref(), Some(legal));
            assert_eq!(data.name, data.legal_name);
        }
    }

    #[tokio::test]
    async fn test_parse_empty_input() {
        let data = offline().parse("").await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_parse_is_deterministic() {
        let parser = offline();
        let text = "Nome:\nAna Beatriz Costa\nCPF: 123.456.789-09\nRua das Flores, 120";
        assert_eq!(parser.parse(text).await, parser.parse(text).await);
    }

    #[tokio::test]
    async fn test_debug_does_not_change_results() {
        let text = "Cliente\nMaria Fernanda Souza\nCEP 01311-000";
        let quiet = offline().parse(text).await;
        let loud = FormParser::new(
            ParserConfig::new()
                .with_auto_fetch_postal(false)
                .with_auto_fetch_company(false)
                .with_debug(true),
        )
        .parse(text)
        .await;
        assert_eq!(quiet, loud);
    }

    #[tokio::test]
    async fn test_parse_enriches_through_lookups() {
        let parser = FormParser::new(
            ParserConfig::new()
                .with_postal_lookup(FixedPostal)
                .with_company_lookup(NoCompany),
        );
        let data = parser.parse("Cliente\nMaria Fernanda Souza\nCEP\n01311-000").await;

        assert_eq!(data.address.as_deref(), Some("Avenida Paulista"));
        assert_eq!(data.state.as_deref(), Some("SP"));
    }

    #[tokio::test]
    async fn test_parse_bytes_rejects_binary() {
        let result = offline().parse_bytes(&[0xff, 0xfe, 0x00, 0x80]).await;
        assert!(matches!(result, Err(CadastroError::InvalidInput(_))));

        let data = offline().parse_bytes("E-mail: ana@x.com".as_bytes()).await.unwrap();
        assert_eq!(data.email.as_deref(), Some("ana@x.com"));
    }

    #[tokio::test]
    async fn test_parse_image_runs_ocr() {
        let mock = MockRecognizer::new("Cliente\nMaria Fernanda Souza\nmaria.souza@example.com");
        let file = ImageFile::new("image/png", 1024);
        let data = offline().parse_image(&mock, &file, b"png bytes").await.unwrap();

        assert_eq!(data.name.as_deref(), Some("Maria Fernanda Souza"));
    }

    #[tokio::test]
    async fn test_parse_image_rejects_invalid_upload() {
        let mock = MockRecognizer::new("irrelevant");
        let file = ImageFile::new("image/gif", 1024);
        let result = offline().parse_image(&mock, &file, b"gif bytes").await;

        match result {
            Err(CadastroError::ImageRejected(reason)) => {
                assert_eq!(reason, "Invalid image format. Use JPEG, PNG or WebP.")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_image_propagates_ocr_failure() {
        let file = ImageFile::new("image/jpeg", 1024);
        let result = offline().parse_image(&BrokenOcr, &file, b"jpeg").await;
        assert!(matches!(result, Err(CadastroError::Ocr(_))));
    }
}
