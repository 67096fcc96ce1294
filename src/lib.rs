//! Sutra — batch Cypher execution and natural-language querying for graph
//! databases.
//!
//! Sutra talks to a running graph store over its HTTP query API and offers
//! two things on top of it:
//!
//! - **Batch execution** — read a `;`-delimited statement file, run every
//!   statement in order, and report per-statement success/failure without
//!   aborting the batch on individual errors.
//! - **Natural-language querying** — translate a question into a read-only
//!   Cypher query via an LLM, run it, and phrase the rows as a prose answer.
//!
//! # Architecture
//!
//! - [`batch`] — statement parsing, the sequential executor, summaries
//! - [`client`] — the `GraphClient` seam and the HTTP `RemoteClient`
//! - [`config`] — explicit configuration, validated once at startup
//! - [`nlq`] — thin LLM call-outs (translate / phrase), one request each
//! - [`agent`] — the fixed question-answering pipeline and its tool seam
//! - [`http`] — minimal axum endpoint exposing query/ask/status
//!
//! # Example
//!
//! ```no_run
//! use sutra::{batch, Config, RemoteClient, StatementBatch};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let client = RemoteClient::new(&config);
//!
//!     let statements = StatementBatch::parse(
//!         "CREATE (:Person {name: 'Alice'}); MATCH (n) RETURN n.name",
//!     );
//!     let outcomes = batch::execute(&statements, &client).await;
//!     let summary = batch::summarize(&outcomes);
//!     println!("{}/{} statements succeeded", summary.succeeded, summary.total);
//! }
//! ```

#![warn(clippy::all)]

pub mod agent;
pub mod batch;
pub mod client;
pub mod config;
pub mod http;
pub mod nlq;

// Re-export main types for convenience
pub use agent::{AgentError, AgentResult, AgentRuntime, CypherTool, Tool};
pub use batch::{execute, summarize, Outcome, StatementBatch, Summary};
pub use client::{
    ClientError, ClientResult, GraphClient, QueryResult, RemoteClient, Row, ServerStatus,
    StorageStats,
};
pub use config::{Config, ConfigError, ConfigResult, LlmConfig, LlmProvider};
pub use nlq::{NlqError, NlqResult, Translator};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "1.0.0");
    }
}
