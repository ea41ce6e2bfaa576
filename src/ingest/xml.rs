use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::path::Path;

/// Parse an XML file and re-serialize its element tree. The XML declaration,
/// doctype, and processing instructions are dropped; elements, attributes,
/// and text all come through. Whitespace is not guaranteed byte-for-byte.
pub fn extract(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read XML file: {:?}", path))?;
    let decoded = String::from_utf8_lossy(&bytes);

    let mut reader = Reader::from_str(&decoded);
    let mut writer = Writer::new(Vec::new());

    loop {
        match reader.read_event().context("Failed to parse XML")? {
            Event::Eof => break,
            Event::Decl(_) | Event::DocType(_) | Event::PI(_) | Event::Comment(_) => {}
            event => writer
                .write_event(event)
                .context("Failed to re-serialize XML")?,
        }
    }

    let out = writer.into_inner();
    Ok(String::from_utf8_lossy(&out).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_and_text_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.xml");
        std::fs::write(
            &path,
            "<?xml version=\"1.0\"?>\n<report id=\"7\"><finding>clear</finding></report>",
        )
        .unwrap();

        let text = extract(&path).unwrap();
        assert_eq!(text, "<report id=\"7\"><finding>clear</finding></report>");
    }

    #[test]
    fn test_mismatched_tags_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        std::fs::write(&path, "<a><b></a>").unwrap();

        assert!(extract(&path).is_err());
    }
}
