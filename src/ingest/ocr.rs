use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Extract text from a raster image by running Tesseract OCR over it.
/// Output layout is whatever the engine produces, lightly cleaned.
pub async fn extract(path: &Path) -> Result<String> {
    let canonical = validate_path(path)?;
    let path_str = canonical
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in image path"))?;

    let check = Command::new("tesseract").arg("--version").output().await;
    if check.is_err() {
        anyhow::bail!(
            "Tesseract OCR not found. Install it with:\n  \
             - Ubuntu/Debian: sudo apt install tesseract-ocr\n  \
             - macOS: brew install tesseract\n  \
             - Windows: https://github.com/UB-Mannheim/tesseract/wiki"
        );
    }

    let output = Command::new("tesseract")
        .arg(path_str)
        .arg("stdout")
        .arg("-l")
        .arg("eng")
        .arg("--psm")
        .arg("1") // automatic page segmentation with OSD
        .output()
        .await
        .context("Failed to run tesseract")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Tesseract failed: {}", stderr);
    }

    Ok(clean_ocr_text(&String::from_utf8_lossy(&output.stdout)))
}

/// Resolve to a canonical path safe to hand to an external command.
fn validate_path(path: &Path) -> Result<std::path::PathBuf> {
    let canonical = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve image path: {:?}", path))?;

    if !canonical.is_file() {
        anyhow::bail!("Path is not a regular file: {:?}", path);
    }

    Ok(canonical)
}

/// Trim each line, drop single-character noise, collapse runs of blank lines.
fn clean_ocr_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_pending = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            blank_pending = !lines.is_empty();
            continue;
        }

        if trimmed.len() < 2 && !trimmed.chars().all(|c| c.is_alphanumeric()) {
            continue;
        }

        if blank_pending {
            lines.push("");
            blank_pending = false;
        }
        lines.push(trimmed);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_and_collapses() {
        let input = "  Chest X-ray  \n\n\n  No acute findings  \n | \n Impression: normal ";
        let output = clean_ocr_text(input);
        assert_eq!(output, "Chest X-ray\n\nNo acute findings\nImpression: normal");
    }

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(clean_ocr_text("   \n \n"), "");
    }
}
