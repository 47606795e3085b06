//! Serialization of I/O Docs documents to JSON or YAML text, and writing them to disk.

use crate::document::Document;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a document to pretty-printed JSON, the format the I/O Docs portal reads.
///
/// Field order follows the document structure exactly, so output is stable across runs.
pub fn serialize_json(doc: &Document) -> Result<String> {
    debug!("Serializing I/O Docs document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize I/O Docs document to JSON")
}

/// Serializes a document to YAML, for review or for tools that convert it further.
pub fn serialize_yaml(doc: &Document) -> Result<String> {
    debug!("Serializing I/O Docs document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize I/O Docs document to YAML")
}

/// Writes string content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
