//! End-to-end tests for the batch statement executor
//!
//! Runs real batches against scripted in-process clients so every
//! executor property — ordering, failure isolation, summaries, the
//! pre-flight check — is exercised without a server.

use async_trait::async_trait;
use serde_json::json;
use std::io::Write;
use std::sync::Mutex;

use sutra::{
    batch, ClientError, ClientResult, GraphClient, Outcome, QueryResult, ServerStatus,
    StatementBatch, StorageStats,
};

/// Echoes each statement back as a single row, failing on statements that
/// contain the word INVALID. Records the order statements arrived in.
struct ScriptedClient {
    seen: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GraphClient for ScriptedClient {
    async fn run(&self, cypher: &str) -> ClientResult<QueryResult> {
        self.seen.lock().unwrap().push(cypher.to_string());

        if cypher.contains("INVALID") {
            return Err(ClientError::Query(format!("syntax error near: {}", cypher)));
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
            storage: StorageStats { nodes: 0, edges: 0 },
        })
    }
}

/// Fails every operation, as if the store were unreachable.
struct DeadClient;

#[async_trait]
impl GraphClient for DeadClient {
    async fn run(&self, _cypher: &str) -> ClientResult<QueryResult> {
        Err(ClientError::Connection("connection refused".to_string()))
    }

    async fn status(&self) -> ClientResult<ServerStatus> {
        Err(ClientError::Connection("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_outcome_per_statement_in_order() {
    let client = ScriptedClient::new();
    let statements = StatementBatch::parse("RETURN 1; RETURN 2; RETURN 3");

    let outcomes = batch::execute(&statements, &client).await;

    assert_eq!(outcomes.len(), statements.len());
    let executed: Vec<&str> = outcomes.iter().map(|o| o.statement()).collect();
    assert_eq!(executed, ["RETURN 1", "RETURN 2", "RETURN 3"]);
    assert_eq!(
        *client.seen.lock().unwrap(),
        ["RETURN 1", "RETURN 2", "RETURN 3"]
    );
}

#[tokio::test]
async fn test_failure_does_not_abort_the_batch() {
    let client = ScriptedClient::new();
    let statements = StatementBatch::parse("RETURN 1;RETURN 2;INVALID SYNTAX;RETURN 4");

    let outcomes = batch::execute(&statements, &client).await;

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_success());
    assert!(!outcomes[2].is_success());
    assert!(outcomes[3].is_success());

    match &outcomes[2] {
        Outcome::Failure { statement, error } => {
            assert_eq!(statement, "INVALID SYNTAX");
            assert!(error.contains("syntax error"));
        }
        other => panic!("expected failure, got {:?}", other),
    }

    // The statement after the failure still reached the store.
    assert_eq!(client.seen.lock().unwrap().len(), 4);

    let summary = batch::summarize(&outcomes);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
}

#[tokio::test]
async fn test_connectivity_loss_mid_batch_is_per_statement_failure() {
    let client = DeadClient;
    let statements = StatementBatch::parse("RETURN 1;RETURN 2");

    let outcomes = batch::execute(&statements, &client).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| !o.is_success()));
}

#[tokio::test]
async fn test_round_trip_echo_preserves_statements() {
    let client = ScriptedClient::new();
    let source = "MATCH (n) RETURN n;  CREATE (:Tag) ;RETURN 42";
    let statements = StatementBatch::parse(source);

    let outcomes = batch::execute(&statements, &client).await;

    let echoed: Vec<String> = outcomes
        .iter()
        .map(|o| match o {
            Outcome::Success { statement, rows } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0]["echo"], json!(statement));
                statement.clone()
            }
            Outcome::Failure { .. } => panic!("unexpected failure"),
        })
        .collect();

    assert_eq!(echoed, statements.statements());
}

#[tokio::test]
async fn test_empty_batch_executes_to_nothing() {
    let client = ScriptedClient::new();
    let statements = StatementBatch::parse("  ;; \n");

    let outcomes = batch::execute(&statements, &client).await;

    assert!(outcomes.is_empty());
    assert!(client.seen.lock().unwrap().is_empty());
    assert_eq!(batch::summarize(&outcomes).total, 0);
}

#[tokio::test]
async fn test_verify_reports_false_without_raising() {
    assert!(!DeadClient.verify().await);
    assert!(ScriptedClient::new().verify().await);
}

#[tokio::test]
async fn test_batch_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "RETURN 1;\nRETURN 2;\n\nINVALID SYNTAX;\nRETURN 4;").unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let statements = StatementBatch::parse(&text);
    assert_eq!(statements.len(), 4);

    let client = ScriptedClient::new();
    let outcomes = batch::execute(&statements, &client).await;
    let summary = batch::summarize(&outcomes);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
}
