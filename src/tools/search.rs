//! Search tool implementation
//!
//! Implements the `search(query, limit)` MCP tool over the in-memory corpus.

use crate::cli::SearchArgs;
use crate::error::{validate_query, AppError};
use crate::mcp::{McpResponse, ToolResult};
use crate::search::SearchEngine;
use crate::templates::store;
use anyhow::Result;
use serde_json::Value;
use tracing::debug;

/// Handle search tool call (MCP)
pub async fn handle_search(id: Option<Value>, args: Value) -> McpResponse {
    let search_args: SearchArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(id, "invalid_params", &format!("Invalid arguments: {}", e))
        }
    };

    match execute_search(search_args).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Shared implementation for search (used by MCP and CLI).
///
/// Any failure past validation is reported as a single request-level error;
/// partial result sets are never returned.
pub async fn execute_search(args: SearchArgs) -> Result<ToolResult, AppError> {
    validate_query(&args.query)?;

    let engine = SearchEngine::new();
    // limit is coerced to a positive integer at this boundary; the engine
    // assumes it
    let limit = args.limit.unwrap_or(engine.policy().default_limit).max(1);

    debug!("Search request: query='{}', limit={}", args.query, limit);

    let corpus = store().snapshot();
    let hits = engine.search(&args.query, limit, &corpus);

    let json = serde_json::to_string_pretty(&hits)?;
    Ok(ToolResult::text(json))
}
