/// Workscope Server — MCP stdio frontend for the analysis core.
///
/// # Modules
///
/// - [`config`] — Server configuration and workspace placeholder resolution.
/// - [`protocol`] — JSON-RPC 2.0 wire types.
/// - [`tools`] — Tool catalog and dispatch onto `workscope-core`.
/// - [`server`] — Line-delimited request/response loop.
/// - [`error`] — Request-level errors mapped to JSON-RPC error codes.
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::Server;
