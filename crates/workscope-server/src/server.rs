/// Line-delimited JSON-RPC server loop.
///
/// Requests are read one per line and answered in order on the calling
/// thread. Each response is written as a single line and flushed before the
/// next request is read.
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::protocol::{JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION, PROTOCOL_VERSION};
use crate::tools::{self, Tool};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Server name advertised in `initialize`.
pub const SERVER_NAME: &str = "workscope";

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve requests from `reader` until EOF, writing responses to `writer`.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> io::Result<()> {
        info!(
            "{SERVER_NAME} MCP server ready (workspace root {})",
            self.config.workspace_root.display()
        );

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line) {
                let text = serde_json::to_string(&response).map_err(io::Error::other)?;
                writeln!(writer, "{text}")?;
                writer.flush()?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw request line. Returns `None` for notifications.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(err) => {
                warn!("Unparseable request: {err}");
                return Some(JsonRpcResponse::failure(Value::Null, &ServerError::from(err)));
            }
        };
        self.handle_request(request)
    }

    /// Dispatch a parsed request. Returns `None` for notifications.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let outcome = if request.jsonrpc != JSONRPC_VERSION {
            Err(ServerError::InvalidRequest(format!(
                "unsupported jsonrpc version '{}'",
                request.jsonrpc
            )))
        } else {
            self.dispatch(&request.method, request.params.as_ref())
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => {
                warn!("Request {} failed: {err}", request.method);
                JsonRpcResponse::failure(id, &err)
            }
        })
    }

    fn dispatch(&self, method: &str, params: Option<&Value>) -> Result<Value, ServerError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": {
                    "tools": {}
                }
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(tools::catalog()),
            "tools/call" => self.call_tool(params),
            other => Err(ServerError::MethodNotFound(other.to_string())),
        }
    }

    fn call_tool(&self, params: Option<&Value>) -> Result<Value, ServerError> {
        let params =
            params.ok_or_else(|| ServerError::InvalidParams("missing parameters".into()))?;
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ServerError::InvalidParams("missing tool name".into()))?;
        let tool = Tool::from_name(name).ok_or_else(|| ServerError::UnknownTool(name.into()))?;

        let empty = json!({});
        let arguments = params.get("arguments").unwrap_or(&empty);

        let text = tool.call(arguments, &self.config)?;
        Ok(tools::text_result(text))
    }
}
