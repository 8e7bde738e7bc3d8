/// Aggregate statistics produced by a single directory scan.
///
/// A `ScanResult` is built once by the scanner, rendered to text, and
/// dropped. Nothing here is shared between scans.
use compact_str::CompactString;
use std::collections::HashMap;
use std::time::SystemTime;

/// A file that survived filtering and could be stat'ed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the scan root.
    pub relative_path: String,
    /// File size in bytes.
    pub size: u64,
    /// Last-modified timestamp.
    pub modified: SystemTime,
}

/// Count of files per extension, remembering first-discovery order.
///
/// Keys are lowercased extensions with a leading dot (`.rs`) or the
/// [`NO_EXTENSION`](crate::analysis::file_types::NO_EXTENSION) sentinel.
#[derive(Debug, Clone, Default)]
pub struct FileTypeHistogram {
    /// `(extension, count)` in the order each extension was first seen.
    entries: Vec<(CompactString, u64)>,
    /// Extension → position in `entries`.
    index: HashMap<CompactString, usize>,
}

impl FileTypeHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more file with the given extension key.
    pub fn record(&mut self, extension: CompactString) {
        match self.index.get(&extension) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(extension.clone(), self.entries.len());
                self.entries.push((extension, 1));
            }
        }
    }

    /// Count for a single extension key (0 if never seen).
    pub fn get(&self, extension: &str) -> u64 {
        self.index
            .get(extension)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. Always equals the number of counted files.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(extension, count)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(ext, count)| (ext.as_str(), *count))
    }
}

/// The complete statistics produced by a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Files counted (non-hidden, metadata readable).
    pub total_files: u64,

    /// Directories retained after hidden-directory filtering.
    ///
    /// Counted once each time a directory appears as a child of a visited
    /// directory, so the scan root itself is never included. This undercounts
    /// by one compared to a naive "every directory in the tree" definition
    /// and is kept that way on purpose.
    pub total_directories: u64,

    /// Sum of the sizes of all counted files.
    pub total_size_bytes: u64,

    /// Per-extension file counts.
    pub file_types: FileTypeHistogram,

    /// Largest files, descending by size, ties in discovery order.
    pub largest_files: Vec<FileEntry>,

    /// Most recently modified files, descending by mtime, ties in discovery order.
    pub newest_files: Vec<FileEntry>,
}
