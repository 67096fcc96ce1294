use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::agent::{AgentError, AgentResult, Tool};
use crate::client::GraphClient;

pub const CYPHER_TOOL_NAME: &str = "run_cypher";

/// Executes a Cypher query against the graph store and returns the result
/// as JSON. The one tool the answer pipeline uses.
pub struct CypherTool {
    client: Arc<dyn GraphClient>,
}

impl CypherTool {
    pub fn new(client: Arc<dyn GraphClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CypherTool {
    fn name(&self) -> &str {
        CYPHER_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Execute a Cypher query against the graph database and return columns and rows as JSON."
    }

    async fn run(&self, args: Value) -> AgentResult<Value> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::Tool("missing 'query' parameter".to_string()))?;

        let result = self
            .client
            .run(query)
            .await
            .map_err(|e| AgentError::Tool(e.to_string()))?;

        serde_json::to_value(&result).map_err(|e| AgentError::Tool(e.to_string()))
    }
}
