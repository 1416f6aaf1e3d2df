use crate::error::ExtractError;
use crate::extractor::r#trait::TextExtractor;
use crate::models::DocumentFormat;
use crate::normalize::clean_text;

/// Plain text extractor. Decoding never fails: invalid UTF-8 sequences are dropped.
pub struct TxtExtractor;

impl TxtExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decode UTF-8, skipping any byte sequence that is not valid
    fn decode_ignoring_invalid(bytes: &[u8]) -> String {
        let mut text = String::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            text.push_str(chunk.valid());
        }
        text
    }
}

impl Default for TxtExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for TxtExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Txt
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        // The whole file is one unit, line breaks included.
        Ok(clean_text(&Self::decode_ignoring_invalid(bytes)))
    }
}
