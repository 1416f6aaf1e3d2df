use crate::extractor::extractor_for;
use crate::models::DocumentFormat;
use std::path::Path;

/// Get file extension from path (without the dot)
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Guess a document format from a path's extension: the first extractor
/// that supports it wins
pub fn detect_format(path: &Path) -> Option<DocumentFormat> {
    let ext = get_extension(path)?;
    DocumentFormat::ALL
        .into_iter()
        .find(|format| extractor_for(*format).supports_extension(&ext))
}
