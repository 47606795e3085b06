use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Parses Rust source files with `syn` so their attributes can be read.
pub struct AstParser;

/// A parsed source file.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub syntax_tree: syn::File,
}

impl AstParser {
    /// Reads and parses one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid Rust syntax.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let syntax_tree = syn::parse_file(&content)
            .with_context(|| format!("Failed to parse Rust syntax in file: {}", path.display()))?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            syntax_tree,
        })
    }

    /// Parses every file that can be parsed, in input order.
    ///
    /// Failures are logged and skipped: documenting the handlers that do parse is more useful
    /// than documenting none.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<ParsedFile> {
        let parsed: Vec<ParsedFile> = paths
            .iter()
            .filter_map(|path| match Self::parse_file(path) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Skipping {}: {:#}", path.display(), e);
                    None
                }
            })
            .collect();

        debug!(
            "Parsing complete: {} succeeded, {} failed",
            parsed.len(),
            paths.len() - parsed.len()
        );
        parsed
    }
}
