//! API header metadata and extension parameter files.

use crate::error::{Error, Result};
use crate::model::ExtensionParameter;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// API-level fields of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiInfo {
    /// Internal API name (not shown to the public)
    pub name: String,
    pub title: String,
    pub description: String,
    pub version: String,
    /// Base URL all method paths are relative to
    pub base_path: String,
}

impl ApiInfo {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            version: version.into(),
            base_path: base_path.into(),
        }
    }
}

/// Loads a list of extension parameters.
///
/// Files ending in `.json` are read as JSON, anything else as YAML (a superset of JSON).
///
/// ```yaml
/// - name: Accept
///   location: header
///   type: string
///   description: Accept mime-type
///   required: true
///   default: text/plain
///   enum: [text/plain]
///   enumDescriptions: [Plain text]
/// ```
pub fn load_extension_parameters(path: &Path) -> Result<Vec<ExtensionParameter>> {
    debug!("Loading extension parameters from {}", path.display());
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let parsed = if is_json {
        serde_json::from_str::<Vec<ExtensionParameter>>(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<Vec<ExtensionParameter>>(&content).map_err(|e| e.to_string())
    };

    let extensions = parsed.map_err(|message| Error::ConfigError {
        file: path.to_path_buf(),
        message,
    })?;
    info!(
        "Loaded {} extension parameters from {}",
        extensions.len(),
        path.display()
    );
    Ok(extensions)
}
