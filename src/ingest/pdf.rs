use anyhow::{Context, Result};
use std::panic;
use std::path::Path;

/// Extract the text layer of a PDF, page by page in document order.
/// Pages with no extractable text contribute nothing, not even a blank line.
pub fn extract(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read PDF file: {:?}", path))?;

    match extract_pages(&bytes) {
        Ok(text) if !text.is_empty() => Ok(text),
        Ok(_) => {
            // Parsed fine but no text layer found; a second extractor
            // sometimes recovers more. An empty result here is legitimate
            // (scanned/image-only PDF) and is handled downstream.
            Ok(extract_whole(&bytes).unwrap_or_default())
        }
        Err(parse_err) => extract_whole(&bytes).map_err(|_| parse_err),
    }
}

fn extract_pages(bytes: &[u8]) -> Result<String> {
    use lopdf::Document;

    let doc = Document::load_mem(bytes).context("Failed to parse PDF")?;

    let mut text = String::new();
    for (page_num, _) in doc.get_pages() {
        if let Ok(page_text) = doc.extract_text(&[page_num]) {
            if !page_text.trim().is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
    }

    Ok(text)
}

/// Whole-document fallback using pdf_extract, which can crash on complex
/// PDFs, so it runs under catch_unwind.
fn extract_whole(bytes: &[u8]) -> Result<String> {
    let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(anyhow::anyhow!("Failed to extract PDF text: {}", e)),
        Err(_) => Err(anyhow::anyhow!("PDF text extraction crashed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_bytes_error() {
        let err = extract_pages(b"definitely not a pdf");
        assert!(err.is_err());
    }
}
