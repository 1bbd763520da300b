//! Field extraction from pasted or OCR text.

mod normalize;
mod parser;
pub mod rules;

pub use normalize::{NormalizedText, normalize};
pub use parser::FormParser;
