use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Read and parse the seller listing document
pub fn load_seller_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => anyhow!("Seller JSON file '{}' not found.", path.display()),
        _ => anyhow!(e).context(format!("Failed to read seller JSON file '{}'", path.display())),
    })?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Unable to parse JSON from file '{}'.", path.display()))?;

    info!("Loaded seller JSON from {} ({} bytes)", path.display(), content.len());
    Ok(value)
}

/// Read the rendered catalog page
pub fn load_catalog_html(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => anyhow!("index.htm file not found at '{}'.", path.display()),
        _ => anyhow!(e).context(format!("Failed to read catalog file '{}'", path.display())),
    })?;

    info!("Loaded catalog from {} ({} bytes)", path.display(), content.len());
    Ok(content)
}
