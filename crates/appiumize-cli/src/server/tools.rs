//! Tool definitions and dispatch.
//!
//! Every tool returns its record as pretty-printed JSON text. A record with
//! `status: error` is still a tool result, flagged with `isError`; only bad
//! arguments and unknown tools become JSON-RPC errors.

use super::protocol::{ToolDescriptor, ToolResult, INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};
use crate::convert::convert_file;
use appiumize_core::{Platform, Status};
use appiumize_rule_engine::{analyze, rewrite, Catalog};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use thiserror::Error;

pub const PING_REPLY: &str = "Pong! appiumize tool server is running.";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i64 {
        match self {
            ToolError::UnknownTool(_) => METHOD_NOT_FOUND,
            ToolError::InvalidArgument { .. } => INVALID_PARAMS,
            ToolError::Serialize(_) => INTERNAL_ERROR,
        }
    }
}

/// Shared state the tools run against
pub struct ToolContext<'a> {
    pub catalog: &'a Catalog,
    pub default_platform: Platform,
    pub output_prefix: &'a str,
}

fn platform_schema(default: Platform) -> Value {
    json!({
        "type": "string",
        "enum": ["android", "ios"],
        "description": "Target platform",
        "default": default.as_str(),
    })
}

/// Tools advertised by `tools/list`
pub fn list_tools(default_platform: Platform) -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "ping".into(),
            description: "Check that the tool server is responding.".into(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDescriptor {
            name: "convertCode".into(),
            description: "Rewrite Perfecto test code into Appium Java client calls.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Perfecto code to convert" },
                    "platform": platform_schema(default_platform),
                },
                "required": ["code"]
            }),
        },
        ToolDescriptor {
            name: "convertFile".into(),
            description: "Convert a file of Perfecto test code and write the result next to it or to outputPath.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filePath": { "type": "string", "description": "File containing Perfecto code" },
                    "outputPath": { "type": "string", "description": "Where to write the converted code" },
                    "platform": platform_schema(default_platform),
                },
                "required": ["filePath"]
            }),
        },
        ToolDescriptor {
            name: "validateCode".into(),
            description: "Report whether code contains Perfecto usage the rules can convert.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Perfecto code to validate" }
                },
                "required": ["code"]
            }),
        },
    ]
}

/// Dispatch a tool call.
pub async fn call_tool(name: &str, args: &Value, ctx: &ToolContext<'_>) -> Result<ToolResult, ToolError> {
    match name {
        "ping" => Ok(ToolResult::text(PING_REPLY.to_string())),
        "convertCode" => {
            let code = required_str(args, "code")?;
            let platform = platform_arg(args, ctx.default_platform)?;
            tracing::info!(chars = code.len(), %platform, "convertCode");

            let result = rewrite(code, platform, ctx.catalog);
            record(&result, result.status)
        }
        "convertFile" => {
            let file_path = required_str(args, "filePath")?;
            let output_path = optional_str(args, "outputPath")?;
            let platform = platform_arg(args, ctx.default_platform)?;
            tracing::info!(file = file_path, %platform, "convertFile");

            let result = convert_file(
                Path::new(file_path),
                output_path.map(Path::new),
                platform,
                ctx.catalog,
                ctx.output_prefix,
            )
            .await;
            record(&result, result.status)
        }
        "validateCode" => {
            let code = required_str(args, "code")?;
            let result = analyze(code, ctx.catalog);
            tracing::info!(
                chars = code.len(),
                convertible = result.is_convertible,
                "validateCode"
            );
            record(&result, result.status)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

fn record<T: Serialize>(value: &T, status: Status) -> Result<ToolResult, ToolError> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(match status {
        Status::Success => ToolResult::text(text),
        Status::Error => ToolResult::error(text),
    })
}

fn required_str<'a>(args: &'a Value, name: &'static str) -> Result<&'a str, ToolError> {
    match args.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        Some(Value::String(_)) => Err(ToolError::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        }),
        Some(_) => Err(ToolError::InvalidArgument {
            name,
            reason: "expected a string".to_string(),
        }),
        None => Err(ToolError::InvalidArgument {
            name,
            reason: "is required".to_string(),
        }),
    }
}

fn optional_str<'a>(args: &'a Value, name: &'static str) -> Result<Option<&'a str>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => required_str(args, name).map(Some),
    }
}

fn platform_arg(args: &Value, default: Platform) -> Result<Platform, ToolError> {
    match optional_str(args, "platform")? {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: appiumize_core::Error| {
            ToolError::InvalidArgument {
                name: "platform",
                reason: e.to_string(),
            }
        }),
    }
}
