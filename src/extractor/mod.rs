pub mod docx;
pub mod pdf;
pub mod r#trait;
pub mod txt;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use r#trait::TextExtractor;
pub use txt::TxtExtractor;

use crate::error::ExtractError;
use crate::models::DocumentFormat;

static PDF: PdfExtractor = PdfExtractor;
static DOCX: DocxExtractor = DocxExtractor;
static TXT: TxtExtractor = TxtExtractor;

/// The extractor that handles a format
pub fn extractor_for(format: DocumentFormat) -> &'static dyn TextExtractor {
    match format {
        DocumentFormat::Pdf => &PDF,
        DocumentFormat::Docx => &DOCX,
        DocumentFormat::Txt => &TXT,
    }
}

/// Run extraction on the blocking pool.
///
/// Decoding is CPU-bound; a panic inside a decoder comes back as an
/// `ExtractError` for the format instead of tearing down the request.
pub async fn extract(format: DocumentFormat, bytes: Vec<u8>) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extractor_for(format).extract(&bytes))
        .await
        .map_err(|e| ExtractError::new(format, e.to_string()))?
}
