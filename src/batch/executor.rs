//! Sequential statement executor with partial-failure reporting

use serde::Serialize;
use tracing::{info, warn};

use super::StatementBatch;
use crate::client::{GraphClient, Row};

/// Per-statement execution result.
///
/// Every statement in a batch produces exactly one outcome, in batch order,
/// regardless of whether earlier statements failed.
#[derive(Debug, Clone, Serialize)]
pub enum Outcome {
    /// The statement ran; all result rows are materialized.
    Success { statement: String, rows: Vec<Row> },
    /// The statement failed; the batch continued past it.
    Failure { statement: String, error: String },
}

impl Outcome {
    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The statement this outcome belongs to
    pub fn statement(&self) -> &str {
        match self {
            Self::Success { statement, .. } | Self::Failure { statement, .. } => statement,
        }
    }
}

/// Aggregate counts over a sequence of outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Run every statement in the batch, in order, against `client`.
///
/// Each statement's rows are fully materialized before the next statement
/// is issued. Any error — connectivity loss mid-batch, a malformed
/// statement, a constraint violation — is caught locally and recorded as a
/// [`Outcome::Failure`]; it never escapes this function and never aborts
/// the batch. No statement is retried, and no transaction spans the batch:
/// each statement commits or fails as an independent unit on the store
/// side.
///
/// The returned vector has exactly one outcome per input statement, 1:1 in
/// input order.
pub async fn execute(batch: &StatementBatch, client: &dyn GraphClient) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(batch.len());

    for (index, statement) in batch.iter().enumerate() {
        info!(
            statement,
            position = index + 1,
            total = batch.len(),
            "executing statement"
        );

        match client.run(statement).await {
            Ok(result) => {
                let rows = result.rows();
                info!(statement, rows = rows.len(), "statement succeeded");
                outcomes.push(Outcome::Success {
                    statement: statement.to_string(),
                    rows,
                });
            }
            Err(e) => {
                warn!(statement, error = %e, "statement failed; continuing");
                outcomes.push(Outcome::Failure {
                    statement: statement.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    outcomes
}

/// Count successes and failures.
pub fn summarize(outcomes: &[Outcome]) -> Summary {
    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    Summary {
        total: outcomes.len(),
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}
