//! Error types for the cadastro-core library.

use thiserror::Error;

/// Main error type for the cadastro library.
///
/// Field extraction itself never fails: a field that cannot be found is
/// simply absent from the result.
#[derive(Error, Debug)]
pub enum CadastroError {
    /// The input handed to the parser is not text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An uploaded image was refused by validation.
    #[error("image rejected: {0}")]
    ImageRejected(String),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// A configuration document could not be read or written as JSON.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while talking to a CEP or CNPJ lookup service.
///
/// These never escape [`crate::FormParser::parse`]; the enrichment
/// coordinator treats every one of them as "not found".
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport failure, including timeouts.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The payload could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The key does not have the expected number of digits.
    #[error("invalid lookup key: {0}")]
    InvalidKey(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition engine failed.
    #[error("OCR engine error: {0}")]
    Engine(String),
}

/// Result type for the cadastro library.
pub type Result<T> = std::result::Result<T, CadastroError>;
