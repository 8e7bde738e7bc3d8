/// Directory walker using `jwalk` in serial mode.
///
/// The walk is single-threaded and name-sorted so that two scans of an
/// unmodified tree visit entries in exactly the same order, which makes the
/// ranked output reproducible.
///
/// # Hidden entries
///
/// Children whose names start with `.` are removed in `process_read_dir`,
/// i.e. while a directory's listing is being built. They are therefore never
/// yielded, never counted, and hidden directories are never descended into.
/// The root itself is exempt, so `.` or `~/.config` scan normally.
///
/// # Per-entry failures
///
/// A file whose metadata cannot be read is skipped without affecting the
/// rest of the walk. A directory whose listing fails still counts at its
/// parent's level; its contents are simply absent.
use crate::analysis::file_types::extension_key;
use crate::model::{FileEntry, FileTypeHistogram};
use jwalk::{Parallelism, WalkDir};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw totals gathered by a single walk, before ranking.
#[derive(Debug, Default)]
pub struct WalkTotals {
    pub files: u64,
    pub directories: u64,
    pub size_bytes: u64,
    pub file_types: FileTypeHistogram,
    /// Every counted file in discovery order. Only used for ranking.
    pub entries: Vec<FileEntry>,
}

/// Whether a directory entry name marks it as hidden.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Walk `root` and accumulate totals.
///
/// `root` must be an existing directory; the caller checks that.
pub fn walk_tree(root: &Path) -> WalkTotals {
    let mut totals = WalkTotals::default();

    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .process_read_dir(|depth, _path, _state, children| {
            // The first call lists only the root itself (depth `None`), named
            // after the whole path. The root is never subject to the filter.
            if depth.is_none() {
                return;
            }
            children.retain(|child| match child {
                Ok(entry) => !is_hidden(&entry.file_name),
                // Keep errors so the walk loop can log them.
                Err(_) => true,
            });
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically an unreadable directory. Its own entry has already
                // been counted by its parent listing.
                debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        // The root itself is never counted.
        if entry.depth == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            totals.directories += 1;
            continue;
        }

        let path = entry.path();

        // Follow symlinks for size and mtime; a dangling link fails here and
        // is skipped like any other unreadable file.
        let (size, modified) = match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                // Symlink to a directory: counted at this level, not descended.
                totals.directories += 1;
                continue;
            }
            Ok(meta) => match meta.modified() {
                Ok(modified) => (meta.len(), modified),
                Err(err) => {
                    debug!("Skipping {}: {err}", path.display());
                    continue;
                }
            },
            Err(err) => {
                debug!("Skipping {}: {err}", path.display());
                continue;
            }
        };

        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();

        totals.files += 1;
        totals.size_bytes += size;
        totals
            .file_types
            .record(extension_key(Path::new(&entry.file_name)));
        totals.entries.push(FileEntry {
            relative_path,
            size,
            modified,
        });
    }

    debug!(
        "Walk of {} complete: {} files, {} dirs",
        root.display(),
        totals.files,
        totals.directories
    );

    totals
}
