/// Data model for Workscope results.
///
/// Re-exports the scan and repository result types and supporting types.
pub mod repo_status;
pub mod scan_result;
pub mod size;

pub use repo_status::{Branch, RemoteInfo, RepoStatus};
pub use scan_result::{FileEntry, FileTypeHistogram, ScanResult};
