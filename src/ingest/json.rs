use anyhow::{Context, Result};
use std::path::Path;

/// Re-encode a JSON file as a 2-space-indented pretty print. Key order and
/// structure come through unchanged.
pub fn extract(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let decoded = String::from_utf8_lossy(&bytes);

    let value: serde_json::Value =
        serde_json::from_str(&decoded).context("Failed to parse JSON")?;

    serde_json::to_string_pretty(&value).context("Failed to re-encode JSON")
}
