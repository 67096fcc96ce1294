//! HTTP handlers for the query/ask/status API

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::agent::AgentRuntime;
use crate::client::{ClientError, GraphClient};

/// Shared state behind every route.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GraphClient>,
    /// Present only when LLM settings are configured.
    pub agent: Option<Arc<AgentRuntime>>,
}

/// Request body for `/api/query` and `/api/ask`
#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Handler for Cypher queries
pub async fn query_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> impl IntoResponse {
    match state.client.run(&payload.query).await {
        Ok(result) => Json(result).into_response(),
        Err(e @ ClientError::Query(_)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// Handler for natural-language questions
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> impl IntoResponse {
    let Some(agent) = state.agent.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "natural-language querying is not configured" })),
        )
            .into_response();
    };

    match agent.answer(&payload.query).await {
        Ok(answer) => Json(json!({ "result": answer })).into_response(),
        Err(e) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// Handler for system status, proxied from the graph store
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.status().await {
        Ok(status) => Json(status).into_response(),
        Err(e) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
