use anyhow::{Context, Result};
use std::path::Path;

/// Read a file as UTF-8 text, tolerating invalid byte sequences.
/// Serves `.txt` files and the fallback path for unrecognized extensions.
pub fn extract(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let content = "Patient presents with mild fever.\nBP 120/80.";
        std::fs::write(&path, content).unwrap();

        assert_eq!(extract(&path).unwrap(), content);
    }

    #[test]
    fn test_invalid_bytes_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        std::fs::write(&path, [b'o', b'k', 0xC3, 0x28]).unwrap();

        let text = extract(&path).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.contains('\u{FFFD}'));
    }
}
