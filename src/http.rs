//! HTTP query surface
//!
//! Serves the search and health endpoints over HTTP for callers that prefer
//! a plain GET interface to the MCP tools. Handlers only read corpus
//! snapshots; the HTTP layer never triggers a load.

use crate::error::validate_query;
use crate::search::{SearchEngine, SearchHit};
use crate::templates::store;
use crate::tools::status::health_document;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

/// Query-string parameters for `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub limit: Option<usize>,
}

async fn search_handler(
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchHit>>, (StatusCode, String)> {
    validate_query(&params.query).map_err(|e| (StatusCode::BAD_REQUEST, e.message()))?;

    let engine = SearchEngine::new();
    let limit = params.limit.unwrap_or(engine.policy().default_limit).max(1);
    let corpus = store().snapshot();

    Ok(Json(engine.search(&params.query, limit, &corpus)))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(health_document())
}

/// Router with the read-only query surface
pub fn router() -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/health", get(health_handler))
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_handler_rejects_empty_query() {
        let result = search_handler(Query(SearchParams {
            query: String::new(),
            limit: None,
        }))
        .await;

        match result {
            Err((status, _)) => assert_eq!(status, StatusCode::BAD_REQUEST),
            Ok(_) => panic!("Expected 400 for empty query"),
        }
    }

    #[tokio::test]
    async fn test_health_handler_shape() {
        let Json(doc) = health_handler().await;
        assert_eq!(doc["status"], "ok");
        assert!(doc["templates_loaded"].is_u64());
    }
}
