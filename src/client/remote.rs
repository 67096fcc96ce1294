//! RemoteClient — network client for a running graph store
//!
//! Connects via HTTP to the store's query API with basic auth.

use async_trait::async_trait;
use reqwest::Client;

use crate::client::models::{QueryResult, ServerStatus};
use crate::client::{ClientError, ClientResult, GraphClient};
use crate::config::Config;

/// Network client that connects to a running graph store.
///
/// Uses HTTP transport for the `/api/query` and `/api/status` endpoints,
/// authenticating every request with the configured credentials. No
/// request timeout is set: a hanging statement blocks its batch, which is
/// left to the caller to guard against.
#[derive(Clone)]
pub struct RemoteClient {
    base_url: String,
    username: String,
    password: String,
    http_client: Client,
}

impl RemoteClient {
    /// Create a new RemoteClient from validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.uri.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl GraphClient for RemoteClient {
    async fn run(&self, cypher: &str) -> ClientResult<QueryResult> {
        let url = format!("{}/api/query", self.base_url);
        let body = serde_json::json!({ "query": cypher });

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            let result: QueryResult = response.json().await?;
            Ok(result)
        } else {
            let error_body: serde_json::Value = response
                .json()
                .await
                .unwrap_or_else(|_| serde_json::json!({ "error": "Unknown error" }));
            let msg = error_body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            Err(ClientError::Query(msg))
        }
    }

    async fn status(&self) -> ClientResult<ServerStatus> {
        let url = format!("{}/api/status", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if response.status().is_success() {
            let status: ServerStatus = response.json().await?;
            Ok(status)
        } else {
            Err(ClientError::Connection(format!(
                "status endpoint returned {}",
                response.status()
            )))
        }
    }
}
