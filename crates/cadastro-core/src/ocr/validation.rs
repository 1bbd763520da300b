//! Upload checks run before an image is handed to OCR.

use serde::{Deserialize, Serialize};

use crate::models::config::ImageConfig;

/// What validation needs to know about an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub mime_type: String,
    pub size: u64,
}

impl ImageFile {
    pub fn new(mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Describe raw bytes, sniffing the MIME type from the magic number.
    ///
    /// Unknown formats get `application/octet-stream`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mime_type = image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream");
        Self::new(mime_type, bytes.len() as u64)
    }
}

/// Accepted types and size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageValidationOptions {
    pub max_file_size: u64,
    pub allowed_types: Vec<String>,
}

impl Default for ImageValidationOptions {
    fn default() -> Self {
        Self::from(&ImageConfig::default())
    }
}

impl From<&ImageConfig> for ImageValidationOptions {
    fn from(config: &ImageConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
            allowed_types: config.allowed_types.clone(),
        }
    }
}

/// Validation verdict. `error` is set exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageValidation {
    fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn rejected(reason: String) -> Self {
        Self {
            valid: false,
            error: Some(reason),
        }
    }
}

/// Check the file type against the allow-list, then the size limit.
pub fn validate_image(file: &ImageFile, options: &ImageValidationOptions) -> ImageValidation {
    if !options.allowed_types.iter().any(|t| *t == file.mime_type) {
        return ImageValidation::rejected("Invalid image format. Use JPEG, PNG or WebP.".to_string());
    }

    if file.size > options.max_file_size {
        let max_mb = options.max_file_size as f64 / 1024.0 / 1024.0;
        return ImageValidation::rejected(format!("Image too large. Maximum size: {}MB.", max_mb));
    }

    ImageValidation::accepted()
}
