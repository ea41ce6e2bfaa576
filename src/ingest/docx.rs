use anyhow::{Context, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::path::Path;

/// Extract paragraph text from a Word document, joined by newlines in
/// document order. Empty paragraphs keep their line.
pub fn extract(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read Word file: {:?}", path))?;

    let docx = read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("Failed to parse Word document: {:?}", e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Paragraph → Run → Text is the path through the document tree. Runs within
/// a paragraph are parts of the same sentence, so they concatenate with no
/// separator.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
