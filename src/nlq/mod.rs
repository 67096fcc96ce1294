//! Natural-language querying call-outs
//!
//! Text-to-Cypher translation and answer phrasing, each a single LLM HTTP
//! request. No retries, no streaming, no conversation state — planning
//! stays with the external service.

pub mod client;

pub use client::LlmClient;

use thiserror::Error;

use crate::config::LlmConfig;

#[derive(Error, Debug)]
pub enum NlqError {
    #[error("LLM API error: {0}")]
    Api(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type NlqResult<T> = Result<T, NlqError>;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a Cypher expert answering questions about a graph database.";

/// Translates questions into read-only Cypher and rows into prose.
pub struct Translator {
    client: LlmClient,
    system_prompt: String,
}

impl Translator {
    pub fn new(config: &LlmConfig) -> NlqResult<Self> {
        let client = LlmClient::new(config)?;
        let system_prompt = config
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());
        Ok(Self {
            client,
            system_prompt,
        })
    }

    /// Translate a natural-language question into a read-only Cypher query.
    ///
    /// `schema_hint` is prepended when non-empty so the model knows the
    /// labels and relationship types in use. Generated queries containing
    /// write clauses are rejected.
    pub async fn to_cypher(&self, question: &str, schema_hint: &str) -> NlqResult<String> {
        let prompt = if schema_hint.is_empty() {
            format!(
                "Translate this question into a read-only OpenCypher query:\n\"{}\"\n\nReturn ONLY the Cypher query, no markdown, no explanations.",
                question
            )
        } else {
            format!(
                "Given this graph schema:\n{}\n\nTranslate this question into a read-only OpenCypher query:\n\"{}\"\n\nReturn ONLY the Cypher query, no markdown, no explanations.",
                schema_hint, question
            )
        };

        let raw = self.client.complete(&self.system_prompt, &prompt).await?;
        let cypher = extract_cypher(&raw);

        if is_read_only(&cypher) {
            Ok(cypher)
        } else {
            Err(NlqError::Validation(
                "generated query contains write operations".to_string(),
            ))
        }
    }

    /// Turn a query result into a prose answer to the original question.
    pub async fn phrase_answer(
        &self,
        question: &str,
        result: &serde_json::Value,
    ) -> NlqResult<String> {
        let prompt = format!(
            "Question: {}\n\nQuery result (JSON):\n{}\n\nAnswer the question in plain prose using only the data above. If the result is empty, say so.",
            question, result
        );
        self.client.complete(&self.system_prompt, &prompt).await
    }
}

/// Extract a Cypher query from an LLM response that may contain markdown
/// fences, explanations, or multiple code blocks.
fn extract_cypher(response: &str) -> String {
    let trimmed = response.trim();

    // If the response contains a fenced code block, extract the first one
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        // Skip language tag (e.g. "cypher\n")
        let code_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_fence[code_start..].find("```") {
            return after_fence[code_start..code_start + end].trim().to_string();
        }
    }

    // No fences — take lines that look like Cypher
    let cypher_keywords = ["MATCH", "RETURN", "WITH", "UNWIND", "CALL", "OPTIONAL"];
    let lines: Vec<&str> = trimmed
        .lines()
        .filter(|line| {
            let upper = line.trim().to_uppercase();
            cypher_keywords.iter().any(|kw| upper.starts_with(kw))
                || upper.starts_with("WHERE")
                || upper.starts_with("ORDER")
                || upper.starts_with("LIMIT")
        })
        .collect();

    if !lines.is_empty() {
        return lines.join(" ");
    }

    // Fallback: strip outer fences and return as-is
    trimmed
        .trim_start_matches("```cypher")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
        .to_string()
}

fn is_read_only(query: &str) -> bool {
    let q = query.to_uppercase();
    !q.contains("CREATE")
        && !q.contains("DELETE")
        && !q.contains("SET")
        && !q.contains("MERGE")
        && !q.contains("DROP")
        && !q.contains("REMOVE")
}
