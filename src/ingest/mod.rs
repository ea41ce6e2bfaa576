pub mod docx;
pub mod json;
pub mod ocr;
pub mod pdf;
pub mod table;
pub mod text;
pub mod xml;

use std::path::Path;
use thiserror::Error;

/// Source formats recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Pdf,
    Docx,
    Csv,
    Tsv,
    Json,
    Xml,
    Image,
    /// No recognized extension; read as best-effort text
    Other,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("txt") => SourceFormat::PlainText,
            Some("pdf") => SourceFormat::Pdf,
            Some("docx") => SourceFormat::Docx,
            Some("csv") => SourceFormat::Csv,
            Some("tsv") => SourceFormat::Tsv,
            Some("json") => SourceFormat::Json,
            Some("xml") => SourceFormat::Xml,
            Some("png" | "jpg" | "jpeg" | "bmp" | "tiff") => SourceFormat::Image,
            _ => SourceFormat::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::PlainText => "text",
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "word document",
            SourceFormat::Csv => "csv",
            SourceFormat::Tsv => "tsv",
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
            SourceFormat::Image => "image (ocr)",
            SourceFormat::Other => "unknown (reading as text)",
        }
    }
}

/// A handler error caught at the extraction boundary. Its rendering is the
/// placeholder that stands in for the file's text.
#[derive(Debug, Error)]
#[error("[ERROR reading file: {message}]")]
pub struct ExtractFailure {
    message: String,
}

impl ExtractFailure {
    fn new(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
        }
    }
}

/// Outcome of extracting one file: text, or a recoverable failure that
/// downstream stages must treat as ordinary text content.
#[derive(Debug)]
pub enum Extraction {
    Text(String),
    Failed(ExtractFailure),
}

impl Extraction {
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Failed(failure) => failure.to_string(),
        }
    }
}

/// Extract a plain-text view of any file, dispatching on its extension.
/// Never fails: handler errors become an `Extraction::Failed` placeholder.
pub async fn extract(path: &Path) -> Extraction {
    let result = match SourceFormat::from_path(path) {
        SourceFormat::PlainText | SourceFormat::Other => text::extract(path),
        SourceFormat::Pdf => pdf::extract(path),
        SourceFormat::Docx => docx::extract(path),
        SourceFormat::Csv => table::extract(path, b','),
        SourceFormat::Tsv => table::extract(path, b'\t'),
        SourceFormat::Json => json::extract(path),
        SourceFormat::Xml => xml::extract(path),
        SourceFormat::Image => ocr::extract(path).await,
    };

    match result {
        Ok(text) => Extraction::Text(text),
        Err(err) => Extraction::Failed(ExtractFailure::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("report.txt")),
            SourceFormat::PlainText
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("scan.PDF")),
            SourceFormat::Pdf
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("notes.Docx")),
            SourceFormat::Docx
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("labs.tsv")),
            SourceFormat::Tsv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("xray.JPEG")),
            SourceFormat::Image
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("mystery.bin")),
            SourceFormat::Other
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("no_extension")),
            SourceFormat::Other
        );
    }

    #[tokio::test]
    async fn test_malformed_pdf_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.7 this is not actually a pdf").unwrap();

        let text = extract(&path).await.into_text();
        assert!(text.starts_with("[ERROR reading file:"), "got: {text}");
    }

    #[tokio::test]
    async fn test_malformed_docx_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let text = extract(&path).await.into_text();
        assert!(text.starts_with("[ERROR reading file:"));
    }

    #[tokio::test]
    async fn test_invalid_json_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{not json").unwrap();

        let text = extract(&path).await.into_text();
        assert!(text.starts_with("[ERROR reading file:"));
    }

    #[tokio::test]
    async fn test_unknown_extension_reads_binary_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.dat");
        std::fs::write(&path, [0x68, 0x69, 0xFF, 0xFE, 0x21]).unwrap();

        // Invalid bytes are tolerated, never an error
        let text = extract(&path).await.into_text();
        assert!(text.starts_with("hi"));
        assert!(!text.contains("[ERROR"));
    }
}
