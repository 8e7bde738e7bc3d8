/// Scanner module — orchestrates a workspace scan.
///
/// [`scan_workspace`] checks the preconditions, runs one serial walk and
/// ranks the collected files. [`scan`] wraps it into the text contract used
/// by frontends: it always returns a report or an error line, never an `Err`.
pub mod walk;

use crate::analysis::{largest_files, newest_files};
use crate::error::ScanError;
use crate::model::ScanResult;
use crate::report;
use std::fs;
use std::path::Path;
use tracing::info;

/// Number of entries in each of the "largest" and "newest" rankings.
pub const DEFAULT_TOP_N: usize = 5;

/// Number of extensions listed in the report's file type section.
pub const DEFAULT_TYPE_LIMIT: usize = 10;

/// Tunables for a scan and its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Length cap of each top-N ranking.
    pub top_n: usize,
    /// Maximum number of extensions rendered in the report.
    pub type_limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            type_limit: DEFAULT_TYPE_LIMIT,
        }
    }
}

/// Scan `root_path` and render the text report.
///
/// Precondition failures produce their specific message; any other failure
/// produces an `Error analyzing workspace: ...` line.
pub fn scan(root_path: &str) -> String {
    let options = ScanOptions::default();
    match scan_workspace(Path::new(root_path), &options) {
        Ok(result) => report::render_scan(root_path, &result, &options),
        Err(err) => err.to_string(),
    }
}

/// Scan `root` and return the structured result.
pub fn scan_workspace(root: &Path, options: &ScanOptions) -> Result<ScanResult, ScanError> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScanError::NotFound(root.to_path_buf()));
        }
        Err(err) => return Err(ScanError::Io(err)),
    };
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    info!("Starting scan of {}", root.display());

    let totals = walk::walk_tree(root);

    Ok(ScanResult {
        total_files: totals.files,
        total_directories: totals.directories,
        total_size_bytes: totals.size_bytes,
        largest_files: largest_files(&totals.entries, options.top_n),
        newest_files: newest_files(&totals.entries, options.top_n),
        file_types: totals.file_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.top_n, 5);
        assert_eq!(options.type_limit, 10);
    }

    #[test]
    fn missing_root_reports_does_not_exist() {
        let out = scan("/definitely/not/a/real/path/for/workscope");
        assert!(out.contains("does not exist"), "got: {out}");
    }
}
