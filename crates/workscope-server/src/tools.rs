/// Tool catalog and dispatch.
///
/// Each tool takes string arguments and returns one text block. The analysis
/// tools hand their text back verbatim, including analyzer error lines.
use crate::config::ServerConfig;
use crate::error::ServerError;
use serde_json::{json, Value};
use tracing::info;

const INFO_TEXT: &str = "This is the workscope MCP server.\n\n\
It gives assistants read-only insight into a local workspace: \
analyze_workspace summarises a directory tree (file counts, sizes, file types, \
largest and newest files) and git_status summarises a Git working copy \
(branch, clean/dirty state, untracked/modified/staged counts, remote).";

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    AnalyzeWorkspace,
    GitStatus,
    GetInfo,
    GetGreetings,
}

impl Tool {
    pub const ALL: [Tool; 4] = [
        Tool::AnalyzeWorkspace,
        Tool::GitStatus,
        Tool::GetInfo,
        Tool::GetGreetings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AnalyzeWorkspace => "analyze_workspace",
            Self::GitStatus => "git_status",
            Self::GetInfo => "get_info",
            Self::GetGreetings => "get_greetings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AnalyzeWorkspace => {
                "Analyze a directory tree: total files, directories and size, \
                 file types, largest and most recently modified files. \
                 Hidden entries are skipped."
            }
            Self::GitStatus => {
                "Summarize the Git repository containing a path: current branch, \
                 clean/dirty status, untracked/modified/staged counts and remote."
            }
            Self::GetInfo => "Get information about this MCP server.",
            Self::GetGreetings => "Get a personalized greeting.",
        }
    }

    /// The single required string argument, if any.
    fn argument(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::AnalyzeWorkspace => Some(("path", "Directory to analyze")),
            Self::GitStatus => Some(("repo_path", "Path inside the repository")),
            Self::GetInfo => None,
            Self::GetGreetings => Some(("name", "The name of the person to greet")),
        }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(self) -> Value {
        match self.argument() {
            Some((arg, description)) => json!({
                "type": "object",
                "properties": {
                    arg: { "type": "string", "description": description }
                },
                "required": [arg]
            }),
            None => json!({ "type": "object", "properties": {} }),
        }
    }

    /// Catalog entry for `tools/list`.
    pub fn definition(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }

    /// Run the tool and return its text.
    pub fn call(self, arguments: &Value, config: &ServerConfig) -> Result<String, ServerError> {
        info!(tool = self.name(), %arguments, "Tool invoked");

        let text = match self {
            Self::AnalyzeWorkspace => {
                let path = config.resolve_path(self.required_arg(arguments)?);
                workscope_core::scan(&path)
            }
            Self::GitStatus => {
                let path = config.resolve_path(self.required_arg(arguments)?);
                workscope_core::inspect(&path)
            }
            Self::GetInfo => INFO_TEXT.to_string(),
            Self::GetGreetings => {
                let name = self.required_arg(arguments)?;
                format!("Hello, {name}! This is the workscope MCP server.")
            }
        };
        Ok(text)
    }

    fn required_arg<'a>(self, arguments: &'a Value) -> Result<&'a str, ServerError> {
        let Some((arg, _)) = self.argument() else {
            return Err(ServerError::InvalidParams(format!(
                "{} takes no arguments",
                self.name()
            )));
        };
        arguments.get(arg).and_then(Value::as_str).ok_or_else(|| {
            ServerError::InvalidParams(format!("{} requires string argument '{arg}'", self.name()))
        })
    }
}

/// The `tools/list` result.
pub fn catalog() -> Value {
    let tools: Vec<Value> = Tool::ALL.into_iter().map(Tool::definition).collect();
    json!({ "tools": tools })
}

/// Wrap tool text as an MCP `tools/call` result.
pub fn text_result(text: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": false
    })
}
