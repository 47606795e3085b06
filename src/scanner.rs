use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds the Rust source files of a handler project.
///
/// Files are returned sorted by path so that endpoint classes, and therefore the methods of
/// the generated document, come out in the same order on every run. `target` and hidden
/// directories are skipped.
///
/// # Example
///
/// ```no_run
/// use iodocs_from_source::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let result = FileScanner::new(PathBuf::from("./my-api")).scan().unwrap();
/// println!("Found {} Rust files", result.rust_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Files found by a scan, and the paths that could not be read.
pub struct ScanResult {
    /// Sorted paths of all `.rs` files
    pub rust_files: Vec<PathBuf>,
    /// One message per inaccessible entry
    pub warnings: Vec<String>,
}

impl FileScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Walks the tree under the root path.
    ///
    /// Inaccessible entries are recorded as warnings and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the root itself is not a readable directory.
    pub fn scan(&self) -> Result<ScanResult> {
        std::fs::read_dir(&self.root_path)
            .with_context(|| format!("Failed to read directory: {}", self.root_path.display()))?;

        let mut rust_files = Vec::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.path() == self.root_path || !is_skipped_dir(e.path()));

        for entry in walker {
            match entry {
                Ok(entry) if is_rust_file(entry.path()) => rust_files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        rust_files.sort();
        debug!("Found {} Rust files under {}", rust_files.len(), self.root_path.display());

        Ok(ScanResult {
            rust_files,
            warnings,
        })
    }
}

fn is_skipped_dir(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    path.is_dir() && (name.starts_with('.') || name == "target")
}

fn is_rust_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs")
}
