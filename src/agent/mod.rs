//! Question answering over the graph
//!
//! Wires the NLQ call-outs and the graph client into a fixed pipeline:
//! translate the question to Cypher, run it through the registered tool,
//! phrase the rows as prose. The runtime never loops and never chooses
//! between tools — the LLM is called exactly twice per question.

pub mod tools;

pub use tools::CypherTool;

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use async_trait::async_trait;
use tracing::debug;

use crate::config::LlmConfig;
use crate::nlq::Translator;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Tool error: {0}")]
    Tool(String),
    #[error("LLM error: {0}")]
    Llm(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

/// A named callable capability exposed to the question-answering pipeline.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn run(&self, args: Value) -> AgentResult<Value>;
}

/// Runtime for answering natural-language questions about the graph.
pub struct AgentRuntime {
    translator: Translator,
    tools: HashMap<String, Arc<dyn Tool>>,
    schema_hint: String,
}

impl AgentRuntime {
    pub fn new(config: &LlmConfig) -> AgentResult<Self> {
        let translator = Translator::new(config).map_err(|e| AgentError::Config(e.to_string()))?;
        Ok(Self {
            translator,
            tools: HashMap::new(),
            schema_hint: String::new(),
        })
    }

    /// Describe the labels and relationship types in use, so translation
    /// has something to aim at.
    pub fn with_schema_hint(mut self, hint: impl Into<String>) -> Self {
        self.schema_hint = hint.into();
        self
    }

    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Answer a question: translate → execute → phrase.
    pub async fn answer(&self, question: &str) -> AgentResult<String> {
        let tool = self
            .tools
            .get(tools::CYPHER_TOOL_NAME)
            .ok_or_else(|| AgentError::Config("no cypher tool registered".to_string()))?;

        let cypher = self
            .translator
            .to_cypher(question, &self.schema_hint)
            .await
            .map_err(|e| AgentError::Llm(e.to_string()))?;
        debug!(question, cypher, "translated question");

        let result = tool.run(json!({ "query": cypher })).await?;

        self.translator
            .phrase_answer(question, &result)
            .await
            .map_err(|e| AgentError::Llm(e.to_string()))
    }
}
