/// File type histogram keys and ranking.
///
/// Files are bucketed by their lowercased extension (with the leading dot),
/// and the histogram is ranked by count for display.
use crate::model::FileTypeHistogram;
use compact_str::{format_compact, CompactString};
use std::path::Path;

/// Histogram key for files without an extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Histogram key for a file name.
///
/// The part after the last `.` is lowercased and prefixed with a dot.
/// Names without a dot (or whose only dot is the leading one) map to
/// [`NO_EXTENSION`]. A trailing dot yields the bare `"."` key.
pub fn extension_key(file_name: &Path) -> CompactString {
    match file_name.extension() {
        Some(ext) => format_compact!(".{}", ext.to_string_lossy().to_lowercase()),
        None => CompactString::const_new(NO_EXTENSION),
    }
}

/// Rank the histogram by count descending, keeping discovery order on ties,
/// and return at most `limit` entries.
pub fn top_types(histogram: &FileTypeHistogram, limit: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = histogram.iter().collect();
    // `sort_by` is stable, which is what keeps ties in discovery order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
