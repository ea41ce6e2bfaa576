use anyhow::{Context, Result};
use std::path::Path;

/// Extract a delimited table (CSV or TSV) as readable text: fields joined
/// with " | ", one line per row.
pub fn extract(path: &Path, delimiter: u8) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read table file: {:?}", path))?;
    let decoded = String::from_utf8_lossy(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(decoded.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to parse delimited row")?;
        rows.push(record.iter().collect::<Vec<_>>().join(" | "));
    }

    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows_joined_with_pipes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labs.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

        assert_eq!(extract(&path, b',').unwrap(), "a | b | c\n1 | 2 | 3");
    }

    #[test]
    fn test_tsv_uses_tab_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labs.tsv");
        std::fs::write(&path, "test\tresult\nWBC\t7.2\n").unwrap();

        assert_eq!(extract(&path, b'\t').unwrap(), "test | result\nWBC | 7.2");
    }

    #[test]
    fn test_ragged_rows_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b\nc,d,e\n").unwrap();

        assert_eq!(extract(&path, b',').unwrap(), "a | b\nc | d | e");
    }
}
