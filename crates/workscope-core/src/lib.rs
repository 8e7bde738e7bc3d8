/// Workscope Core — read-only workspace introspection.
///
/// This crate contains all analysis logic with zero transport dependencies.
/// It is designed to be reusable across different frontends (MCP, CLI).
///
/// # Modules
///
/// - [`model`] — Result types and display formatting helpers.
/// - [`scanner`] — Directory tree walk producing a [`model::ScanResult`].
/// - [`analysis`] — Post-walk aggregation (file types, top files).
/// - [`repo`] — Git working-copy inspection producing a [`model::RepoStatus`].
/// - [`report`] — Fixed-layout text rendering of both results.
/// - [`error`] — Typed errors, rendered to text at the operation boundary.
pub mod analysis;
pub mod error;
pub mod model;
pub mod repo;
pub mod report;
pub mod scanner;

pub use error::{InspectError, ScanError};
pub use repo::{inspect, inspect_repository};
pub use scanner::{scan, scan_workspace, ScanOptions};
