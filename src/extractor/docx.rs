use crate::error::ExtractError;
use crate::extractor::r#trait::TextExtractor;
use crate::models::DocumentFormat;
use crate::normalize::join_units;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

/// Word document extractor. Serves both `.docx` and `.doc` uploads; legacy
/// binary `.doc` files are not OOXML and fail to decode.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Text of a paragraph: its runs concatenated, hyperlinks included
    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut text = String::new();
        Self::push_children(&paragraph.children, &mut text);
        text
    }

    fn push_children(children: &[ParagraphChild], out: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => Self::push_run(run, out),
                ParagraphChild::Hyperlink(link) => Self::push_children(&link.children, out),
                _ => {}
            }
        }
    }

    fn push_run(run: &Run, out: &mut String) {
        for child in &run.children {
            match child {
                RunChild::Text(t) => out.push_str(&t.text),
                RunChild::Tab(_) => out.push('\t'),
                RunChild::Break(_) => out.push('\n'),
                _ => {}
            }
        }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| ExtractError::new(DocumentFormat::Docx, e.to_string()))?;

        // Top-level body paragraphs only; table contents are skipped.
        let paragraphs = docx.document.children.iter().filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(Self::paragraph_text(paragraph)),
            _ => None,
        });

        Ok(join_units(paragraphs))
    }
}
