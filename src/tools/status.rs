//! Status tool implementation
//!
//! Read-only health surface: current corpus size and the configured root.

use crate::cli::StatusArgs;
use crate::error::AppError;
use crate::mcp::{McpResponse, ToolResult};
use crate::templates::store;
use anyhow::Result;
use serde_json::Value;

/// Handle status tool call (MCP)
pub async fn handle_status(id: Option<Value>, args: Value) -> McpResponse {
    let status_args: StatusArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(id, "invalid_params", &format!("Invalid arguments: {}", e))
        }
    };

    match execute_status(status_args).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Shared implementation for status (used by MCP and CLI)
pub async fn execute_status(_args: StatusArgs) -> Result<ToolResult, AppError> {
    let doc = health_document();
    let json = serde_json::to_string_pretty(&doc).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(ToolResult::text(json))
}

/// Health document shared by the status tool and the HTTP surface
pub fn health_document() -> Value {
    let store = store();
    serde_json::json!({
        "status": "ok",
        "templates_loaded": store.len(),
        "template_dir": store.root().display().to_string(),
    })
}
