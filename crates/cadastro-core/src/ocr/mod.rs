//! OCR adapter contract.
//!
//! Recognition itself happens outside this crate. The parser only needs the
//! recognized text; backends implement [`OcrBackend`] to provide it.

mod validation;

pub use validation::{ImageFile, ImageValidation, ImageValidationOptions, validate_image};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Text recognized from one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Full recognized text.
    pub text: String,
    /// Recognized blocks, trimmed, never empty.
    pub blocks: Vec<String>,
    /// Engine confidence, 0 to 100.
    pub confidence: f32,
}

impl OcrOutput {
    /// Build an output, dropping blocks that are blank after trimming.
    pub fn new<I, S>(text: impl Into<String>, blocks: I, confidence: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            text: text.into(),
            blocks: blocks
                .into_iter()
                .map(|b| b.as_ref().trim().to_string())
                .filter(|b| !b.is_empty())
                .collect(),
            confidence,
        }
    }
}

/// Recognition options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOptions {
    /// Tesseract-style language code.
    pub language: String,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            language: "por".to_string(),
        }
    }
}

/// An OCR engine.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    async fn recognize(&self, image: &[u8], options: &OcrOptions) -> Result<OcrOutput, OcrError>;
}

/// Returns preset text regardless of the image.
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    pub text: String,
    pub confidence: f32,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: 100.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

#[async_trait]
impl OcrBackend for MockRecognizer {
    async fn recognize(&self, _image: &[u8], _options: &OcrOptions) -> Result<OcrOutput, OcrError> {
        Ok(OcrOutput::new(
            self.text.clone(),
            self.text.split("\n\n"),
            self.confidence,
        ))
    }
}
