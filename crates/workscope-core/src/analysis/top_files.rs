/// Top-N rankings over the files collected during a scan.
///
/// The whole candidate list is sorted rather than maintaining a bounded heap:
/// a development workspace is small enough that the O(n log n) sort is not
/// worth replacing, and a stable sort gives the tie-breaking for free.
use crate::model::FileEntry;

/// The `n` largest files, descending by size. Ties keep discovery order.
pub fn largest_files(files: &[FileEntry], n: usize) -> Vec<FileEntry> {
    let mut ranked = files.to_vec();
    ranked.sort_by(|a, b| b.size.cmp(&a.size));
    ranked.truncate(n);
    ranked
}

/// The `n` most recently modified files, newest first. Ties keep discovery order.
pub fn newest_files(files: &[FileEntry], n: usize) -> Vec<FileEntry> {
    let mut ranked = files.to_vec();
    ranked.sort_by(|a, b| b.modified.cmp(&a.modified));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn entry(path: &str, size: u64, secs: u64) -> FileEntry {
        FileEntry {
            relative_path: path.to_string(),
            size,
            modified: UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    fn paths(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.relative_path.as_str()).collect()
    }

    #[test]
    fn largest_sorted_descending_and_truncated() {
        let files: Vec<FileEntry> = (1..=8u64)
            .map(|i| entry(&format!("f{i}"), i * 100, i))
            .collect();
        let top = largest_files(&files, 5);
        assert_eq!(paths(&top), vec!["f8", "f7", "f6", "f5", "f4"]);
    }

    /// Equal sizes must come out in the order they were discovered.
    #[test]
    fn largest_ties_are_stable() {
        let files = vec![
            entry("first", 10, 0),
            entry("big", 50, 0),
            entry("second", 10, 0),
            entry("third", 10, 0),
        ];
        let top = largest_files(&files, 5);
        assert_eq!(paths(&top), vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn newest_sorted_by_mtime_descending() {
        let files = vec![
            entry("old", 1, 100),
            entry("new", 1, 300),
            entry("mid", 1, 200),
        ];
        let top = newest_files(&files, 5);
        assert_eq!(paths(&top), vec!["new", "mid", "old"]);
    }

    #[test]
    fn newest_ties_are_stable() {
        let now = SystemTime::now();
        let mut a = entry("a", 1, 0);
        let mut b = entry("b", 1, 0);
        a.modified = now;
        b.modified = now;
        let top = newest_files(&[a, b], 5);
        assert_eq!(paths(&top), vec!["a", "b"]);
    }

    /// Fewer candidates than `n` returns them all without padding.
    #[test]
    fn short_input_is_returned_whole() {
        let files = vec![entry("only", 1, 1)];
        assert_eq!(largest_files(&files, 5).len(), 1);
        assert!(newest_files(&[], 5).is_empty());
    }
}
