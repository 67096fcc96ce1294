//! Tests for the HTTP API, driven through the router without a socket

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use sutra::http::{server::router, AppState};
use sutra::{ClientError, ClientResult, GraphClient, QueryResult, ServerStatus, StorageStats};

struct EchoClient;

#[async_trait]
impl GraphClient for EchoClient {
    async fn run(&self, cypher: &str) -> ClientResult<QueryResult> {
        if cypher.contains("INVALID") {
            return Err(ClientError::Query("syntax error".to_string()));
        }
        Ok(QueryResult {
            columns: vec!["echo".to_string()],
            records: vec![vec![json!(cypher)]],
        })
    }

    async fn status(&self) -> ClientResult<ServerStatus> {
        Ok(ServerStatus {
            status: "healthy".to_string(),
            version: "test".to_string(),
            storage: StorageStats { nodes: 3, edges: 2 },
        })
    }
}

fn test_state() -> AppState {
    AppState {
        client: Arc::new(EchoClient),
        agent: None,
    }
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_query_endpoint_returns_rows() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::post("/api/query")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": "RETURN 1" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["columns"], json!(["echo"]));
    assert_eq!(body["records"], json!([["RETURN 1"]]));
}

#[tokio::test]
async fn test_query_endpoint_maps_query_errors_to_400() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::post("/api/query")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": "INVALID" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("syntax error"));
}

#[tokio::test]
async fn test_status_endpoint_proxies_store_status() {
    let app = router(test_state());

    let response = app
        .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["nodes"], 3);
}

#[tokio::test]
async fn test_ask_endpoint_without_llm_config_is_503() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::post("/api/ask")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": "how many nodes?" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}
