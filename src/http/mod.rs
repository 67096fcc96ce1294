//! Minimal HTTP surface
//!
//! Exposes the query, ask, and status operations behind a small axum
//! router. The server owns nothing: it forwards to the shared
//! [`GraphClient`](crate::client::GraphClient) and, when configured, the
//! [`AgentRuntime`](crate::agent::AgentRuntime).

pub mod handler;
pub mod server;

pub use handler::AppState;
pub use server::HttpServer;
