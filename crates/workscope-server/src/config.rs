/// Server configuration.
///
/// The only setting is the workspace root used to expand path placeholders
/// sent by editors (`${workspaceFolder}`). It comes from `WORKSCOPE_ROOT`,
/// falling back to the process working directory.
use std::path::PathBuf;

/// Environment variable naming the workspace root.
pub const ROOT_ENV_VAR: &str = "WORKSCOPE_ROOT";

/// Placeholders replaced by the workspace root in path arguments.
const PLACEHOLDERS: [&str; 2] = ["${workspaceFolder}", "${workspaceRoot}"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub workspace_root: PathBuf,
}

impl ServerConfig {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    /// Build from the environment.
    ///
    /// An unset or empty `WORKSCOPE_ROOT` falls back to the current
    /// directory; if that cannot be read either, `.` is used.
    pub fn from_env() -> Self {
        let root = std::env::var_os(ROOT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// Replace workspace placeholders in a path argument.
    pub fn resolve_path(&self, raw: &str) -> String {
        let root = self.workspace_root.to_string_lossy();
        PLACEHOLDERS
            .iter()
            .fold(raw.to_string(), |acc, token| acc.replace(token, &root))
    }
}
