//! Graph store client — the connection seam used by the executor
//!
//! [`GraphClient`] is the contract the rest of the crate codes against;
//! [`RemoteClient`] implements it over the store's HTTP API. Tests swap in
//! scripted implementations.

pub mod models;
pub mod remote;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

pub use models::{QueryResult, Row, ServerStatus, StorageStats};
pub use remote::RemoteClient;

/// Errors that can occur when talking to the graph store
#[derive(Error, Debug)]
pub enum ClientError {
    /// Query parsing or execution error reported by the store
    #[error("Query error: {0}")]
    Query(String),

    /// Cannot establish or maintain the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// An open, stateful handle to a graph store.
///
/// The executor borrows an implementor for the duration of a batch and
/// never manages its lifecycle; release happens when the value is dropped.
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Execute one Cypher statement, materializing the full result.
    async fn run(&self, cypher: &str) -> ClientResult<QueryResult>;

    /// Fetch server status.
    async fn status(&self) -> ClientResult<ServerStatus>;

    /// Pre-flight connectivity check: one trivial round-trip statement.
    ///
    /// Never raises; any failure is logged and reported as `false`. This is
    /// a health check, not part of the batch protocol.
    async fn verify(&self) -> bool {
        match self.run("RETURN 1").await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "connectivity check failed");
                false
            }
        }
    }

    /// Ping the server, returning `"PONG"` when it reports healthy.
    async fn ping(&self) -> ClientResult<String> {
        let status = self.status().await?;
        if status.status == "healthy" {
            Ok("PONG".to_string())
        } else {
            Err(ClientError::Connection(format!(
                "server unhealthy: {}",
                status.status
            )))
        }
    }
}
