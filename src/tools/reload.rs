//! Reload tool implementation
//!
//! Rebuilds the corpus from disk and swaps it in atomically. Per-record
//! problems are logged and skipped inside the loader; this tool only reports
//! the resulting corpus size.

use crate::cli::ReloadArgs;
use crate::error::AppError;
use crate::mcp::{McpResponse, ToolResult};
use crate::templates::{reload_corpus, store};
use anyhow::Result;
use serde_json::Value;
use tracing::info;

/// Handle reload tool call (MCP)
pub async fn handle_reload(id: Option<Value>, args: Value) -> McpResponse {
    let reload_args: ReloadArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(id, "invalid_params", &format!("Invalid arguments: {}", e))
        }
    };

    match execute_reload(reload_args).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Shared implementation for reload
pub async fn execute_reload(_args: ReloadArgs) -> Result<ToolResult, AppError> {
    let count = reload_corpus();
    info!("Corpus reloaded: {} templates", count);

    Ok(ToolResult::text(format!(
        "Reloaded {} templates from '{}'",
        count,
        store().root().display()
    )))
}
