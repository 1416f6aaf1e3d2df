use crate::error::ExtractError;
use crate::models::DocumentFormat;

/// Trait for text extractors that turn raw document bytes into normalized text
pub trait TextExtractor: Send + Sync {
    /// The format this extractor decodes
    fn format(&self) -> DocumentFormat;

    /// Extract and normalize the text content of a document
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// Check if this extractor supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        DocumentFormat::from_extension(ext) == Some(self.format())
    }
}
