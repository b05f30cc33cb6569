//! Stdio tool server: newline-delimited JSON-RPC on stdin, responses on
//! stdout.

pub mod protocol;
pub mod tools;

use appiumize_core::Platform;
use appiumize_rule_engine::Catalog;
use protocol::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tools::ToolContext;

pub const SERVER_NAME: &str = "appiumize";

pub struct ToolServer {
    catalog: Arc<Catalog>,
    default_platform: Platform,
    output_prefix: String,
}

impl ToolServer {
    pub fn new(catalog: Arc<Catalog>, default_platform: Platform, output_prefix: impl Into<String>) -> Self {
        Self {
            catalog,
            default_platform,
            output_prefix: output_prefix.into(),
        }
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve one request per line from `reader` until EOF.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            categories = self.catalog.categories().len(),
            rules = self.catalog.len(),
            "tool server started"
        );
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some(response) = self.handle_message(trimmed).await else {
                continue;
            };
            let mut out = match serde_json::to_string(&response) {
                Ok(out) => out,
                Err(e) => {
                    tracing::error!("failed to serialize response: {e}");
                    continue;
                }
            };
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }

        tracing::info!("stdin closed, tool server stopping");
        Ok(())
    }

    /// Handle one JSON-RPC message. Notifications produce no response.
    pub async fn handle_message(&self, msg: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(msg) {
            Ok(v) => v,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ))
            }
        };

        let raw_id = value.get("id").cloned().filter(|id| !id.is_null());
        let req: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    raw_id,
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ))
            }
        };

        if req.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                req.id,
                INVALID_REQUEST,
                format!("Invalid request: unsupported jsonrpc version '{}'", req.jsonrpc),
            ));
        }

        let Some(id) = req.id else {
            tracing::debug!(method = %req.method, "notification");
            return None;
        };
        let id = Some(id);

        tracing::debug!(method = %req.method, "request");
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": tools::list_tools(self.default_platform) }),
            ),
            "tools/call" => self.handle_tools_call(id, &req.params).await,
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.into(),
            capabilities: ServerCapabilities {
                tools: ToolCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
        };
        to_response(id, &result)
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: &Value) -> JsonRpcResponse {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing tool name".into());
        };
        let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let ctx = ToolContext {
            catalog: &self.catalog,
            default_platform: self.default_platform,
            output_prefix: &self.output_prefix,
        };

        match tools::call_tool(name, &args, &ctx).await {
            Ok(result) => to_response(id, &result),
            Err(e) => {
                tracing::warn!(tool = name, "{e}");
                JsonRpcResponse::error(id, e.code(), e.to_string())
            }
        }
    }
}

fn to_response<T: serde::Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Internal error: {e}")),
    }
}
