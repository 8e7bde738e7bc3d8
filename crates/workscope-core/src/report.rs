/// Fixed-layout text rendering of scan and repository results.
///
/// Both renderers join lines with `\n` and emit no trailing newline.
use crate::analysis::top_types;
use crate::model::size::{format_size, format_timestamp};
use crate::model::{RepoStatus, ScanResult};
use crate::scanner::ScanOptions;

/// Render a [`ScanResult`] as the workspace report.
pub fn render_scan(root_path: &str, result: &ScanResult, options: &ScanOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Workspace: {root_path}"));
    lines.push(String::new());
    lines.push(format!("Total Files: {}", result.total_files));
    lines.push(format!("Total Directories: {}", result.total_directories));
    lines.push(format!("Total Size: {}", format_size(result.total_size_bytes)));

    lines.push(String::new());
    lines.push("File Types:".to_string());
    for (ext, count) in top_types(&result.file_types, options.type_limit) {
        lines.push(format!("  {ext}: {count}"));
    }

    lines.push(String::new());
    lines.push("Largest Files:".to_string());
    for file in &result.largest_files {
        lines.push(format!("  {} ({})", file.relative_path, format_size(file.size)));
    }

    lines.push(String::new());
    lines.push("Newest Files:".to_string());
    for file in &result.newest_files {
        lines.push(format!(
            "  {} ({})",
            file.relative_path,
            format_timestamp(file.modified)
        ));
    }

    lines.join("\n")
}

/// Render a [`RepoStatus`] as the repository report.
///
/// Zero counts and a missing remote omit their lines entirely.
pub fn render_repo(repo_path: &str, status: &RepoStatus) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Repository: {repo_path}"));
    lines.push(format!("Current branch: {}", status.branch.label()));

    if status.dirty {
        lines.push("Status: Working directory has uncommitted changes".to_string());
    } else {
        lines.push("Status: Working directory is clean".to_string());
    }

    if status.untracked_count > 0 {
        lines.push(format!("Untracked files: {}", status.untracked_count));
    }
    if status.modified_count > 0 {
        lines.push(format!("Modified files: {}", status.modified_count));
    }
    if status.staged_count > 0 {
        lines.push(format!("Staged files: {}", status.staged_count));
    }

    if let Some(remote) = &status.remote {
        lines.push(format!("Remote: {} ({})", remote.name, remote.url));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Branch, FileEntry, FileTypeHistogram, RemoteInfo};
    use compact_str::CompactString;
    use std::time::SystemTime;

    // ── render_scan ──────────────────────────────────────────────────────

    #[test]
    fn empty_scan_has_all_sections() {
        let out = render_scan("/w", &ScanResult::default(), &ScanOptions::default());
        let expected = "Workspace: /w\n\
                        \n\
                        Total Files: 0\n\
                        Total Directories: 0\n\
                        Total Size: 0.00 B\n\
                        \n\
                        File Types:\n\
                        \n\
                        Largest Files:\n\
                        \n\
                        Newest Files:";
        assert_eq!(out, expected);
    }

    #[test]
    fn scan_lists_types_and_files() {
        let mut file_types = FileTypeHistogram::new();
        file_types.record(CompactString::new(".csv"));
        let entry = FileEntry {
            relative_path: "data.CSV".into(),
            size: 2048,
            modified: SystemTime::now(),
        };
        let result = ScanResult {
            total_files: 1,
            total_directories: 0,
            total_size_bytes: 2048,
            file_types,
            largest_files: vec![entry.clone()],
            newest_files: vec![entry],
        };

        let out = render_scan("/w", &result, &ScanOptions::default());
        assert!(out.contains("Total Size: 2.00 KB"));
        assert!(out.contains("File Types:\n  .csv: 1\n"));
        assert!(out.contains("Largest Files:\n  data.CSV (2.00 KB)\n"));
        assert!(out.contains("Newest Files:\n  data.CSV ("));
        assert!(!out.ends_with('\n'));
    }

    /// Only `type_limit` extensions are rendered.
    #[test]
    fn scan_caps_file_types() {
        let mut file_types = FileTypeHistogram::new();
        for i in 0..12 {
            file_types.record(CompactString::new(format!(".e{i}")));
        }
        let result = ScanResult {
            total_files: 12,
            file_types,
            ..ScanResult::default()
        };
        let out = render_scan("/w", &result, &ScanOptions::default());
        let type_lines = out.lines().filter(|l| l.starts_with("  .e")).count();
        assert_eq!(type_lines, 10);
    }

    // ── render_repo ──────────────────────────────────────────────────────

    fn clean_status() -> RepoStatus {
        RepoStatus {
            branch: Branch::Named("main".into()),
            dirty: false,
            untracked_count: 0,
            modified_count: 0,
            staged_count: 0,
            remote: None,
        }
    }

    #[test]
    fn clean_repo_omits_count_lines() {
        let out = render_repo("/r", &clean_status());
        assert_eq!(
            out,
            "Repository: /r\nCurrent branch: main\nStatus: Working directory is clean"
        );
    }

    #[test]
    fn dirty_repo_lists_counts_in_order() {
        let status = RepoStatus {
            branch: Branch::Detached,
            dirty: true,
            untracked_count: 2,
            modified_count: 1,
            staged_count: 3,
            remote: Some(RemoteInfo {
                name: "origin".into(),
                url: "https://example.com/repo.git".into(),
            }),
        };
        let out = render_repo("/r", &status);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Repository: /r",
                "Current branch: DETACHED HEAD",
                "Status: Working directory has uncommitted changes",
                "Untracked files: 2",
                "Modified files: 1",
                "Staged files: 3",
                "Remote: origin (https://example.com/repo.git)",
            ]
        );
    }

    #[test]
    fn zero_counts_are_omitted_individually() {
        let status = RepoStatus {
            dirty: true,
            staged_count: 1,
            ..clean_status()
        };
        let out = render_repo("/r", &status);
        assert!(out.contains("Staged files: 1"));
        assert!(!out.contains("Untracked files"));
        assert!(!out.contains("Modified files"));
    }
}
