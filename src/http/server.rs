//! HTTP server for the query/ask/status API

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handler::{ask_handler, query_handler, status_handler, AppState};

/// Build the API router. Split out from [`HttpServer`] so tests can drive
/// it without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/query", post(query_handler))
        .route("/api/ask", post(ask_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server exposing the query/ask/status API
pub struct HttpServer {
    state: AppState,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: AppState, port: u16) -> Self {
        Self { state, port }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone());

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("API available at http://localhost:{}", self.port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
