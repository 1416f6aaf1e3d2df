use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A file received in the `file` field of a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename declared by the client, if any
    pub filename: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create a new UploadedFile instance
    pub fn new(filename: Option<String>, bytes: Vec<u8>) -> Self {
        Self { filename, bytes }
    }

    /// Filename for log lines
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("<unnamed>")
    }

    /// Case-sensitive suffix check against a list of extensions (with the dot)
    pub fn has_extension(&self, extensions: &[&str]) -> bool {
        match self.filename.as_deref() {
            Some(name) => extensions.iter().any(|ext| name.ends_with(ext)),
            None => false,
        }
    }
}

/// The closed set of document formats the service can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [Self::Pdf, Self::Docx, Self::Txt];

    /// Label used in decode error messages ("Failed to read PDF file: ...")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
        }
    }

    /// Extensions the route for this format accepts.
    ///
    /// `None` means the route performs no extension check and lets the
    /// decoder reject foreign content.
    pub fn required_extensions(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Pdf => None,
            Self::Docx => Some(&[".doc", ".docx"]),
            Self::Txt => Some(&[".txt"]),
        }
    }

    /// Error message for an upload whose filename fails the extension check.
    /// `None` for formats without an extension check.
    pub fn invalid_type_message(&self) -> Option<&'static str> {
        match self {
            Self::Pdf => None,
            Self::Docx => Some("Invalid file type. Only .doc and .docx allowed"),
            Self::Txt => Some("Invalid file type. Only .txt allowed"),
        }
    }

    /// Guess the format from a bare extension (no dot, any case)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" | "docx" => Some(Self::Docx),
            "txt" | "text" => Some(Self::Txt),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
            .ok_or_else(|| format!("unknown format '{}' (expected pdf, docx or txt)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_extension_is_case_sensitive() {
        let file = UploadedFile::new(Some("report.DOCX".to_string()), Vec::new());
        assert!(!file.has_extension(&[".doc", ".docx"]));

        let file = UploadedFile::new(Some("report.docx".to_string()), Vec::new());
        assert!(file.has_extension(&[".doc", ".docx"]));
    }

    #[test]
    fn test_uploaded_file_without_name_fails_check() {
        let file = UploadedFile::new(None, b"hello".to_vec());
        assert!(!file.has_extension(&[".txt"]));
        assert_eq!(file.display_name(), "<unnamed>");
    }

    #[test]
    fn test_doc_suffix_matches_plain_doc() {
        let file = UploadedFile::new(Some("legacy.doc".to_string()), Vec::new());
        assert!(file.has_extension(DocumentFormat::Docx.required_extensions().unwrap()));
    }

    #[test]
    fn test_pdf_has_no_extension_check() {
        assert!(DocumentFormat::Pdf.required_extensions().is_none());
    }

    #[test]
    fn test_invalid_type_message_only_for_checked_formats() {
        for format in DocumentFormat::ALL {
            assert_eq!(
                format.invalid_type_message().is_some(),
                format.required_extensions().is_some()
            );
        }
    }

    #[test]
    fn test_format_parse_agrees_with_extension() {
        for name in ["pdf", "PDF", "doc", "docx", "txt", "text", "md", ""] {
            assert_eq!(
                name.parse::<DocumentFormat>().ok(),
                DocumentFormat::from_extension(name),
                "name {:?}",
                name
            );
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("doc"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_extension("md"), None);
    }

    #[test]
    fn test_format_parse_and_display() {
        for format in DocumentFormat::ALL {
            assert_eq!(format.to_string().parse::<DocumentFormat>().unwrap(), format);
        }
        assert!("xls".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn test_format_serialization() {
        let json = serde_json::to_string(&DocumentFormat::Docx).unwrap();
        assert_eq!(json, "\"docx\"");
        let back: DocumentFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(back, DocumentFormat::Txt);
    }
}
