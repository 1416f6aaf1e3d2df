use crate::error::ExtractError;
use crate::extractor::r#trait::TextExtractor;
use crate::models::DocumentFormat;
use crate::normalize::{clean_text, join_units};
use lopdf::Document;
use tracing::{debug, warn};

/// PDF text extractor.
///
/// Pages are read with lopdf in document order and normalized one at a time.
/// When lopdf finds no text at all, pdf-extract gets a second try on the same
/// bytes, page by page.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of every page, in page order
    fn page_texts(doc: &Document) -> Vec<String> {
        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => {
                    debug!(page = page_num, chars = text.len(), "extracted page text");
                    texts.push(text);
                }
                Err(e) => {
                    warn!(page = page_num, error = %e, "failed to extract page text, treating page as empty");
                    texts.push(String::new());
                }
            }
        }

        texts
    }

    /// Second opinion from pdf-extract. Returns `None` if it fails or panics.
    fn fallback_page_texts(bytes: &[u8]) -> Option<Vec<String>> {
        let result =
            std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
        match result {
            Ok(Ok(pages)) => Some(pages),
            Ok(Err(e)) => {
                debug!(error = %e, "pdf-extract fallback failed");
                None
            }
            Err(_) => {
                warn!("pdf-extract panicked during fallback extraction");
                None
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ExtractError::new(DocumentFormat::Pdf, e.to_string()))?;

        let mut pages = Self::page_texts(&doc);

        let has_text = pages.iter().any(|page| !clean_text(page).is_empty());
        if !pages.is_empty() && !has_text {
            if let Some(fallback) = Self::fallback_page_texts(bytes) {
                pages = fallback;
            }
        }

        Ok(join_units(&pages))
    }
}
