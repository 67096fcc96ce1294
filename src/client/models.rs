//! Data models for the graph store API
//!
//! These types mirror the store's HTTP response structures and are shared
//! by every `GraphClient` implementation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One result row: an ordered mapping of column name to value.
///
/// Values are dynamic — string, number, boolean, null, or nested
/// structures for nodes and relationships.
pub type Row = IndexMap<String, serde_json::Value>;

/// Result of executing a Cypher statement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column names, in projection order
    pub columns: Vec<String>,
    /// Tabular result rows
    pub records: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Number of result records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Zip column names with each record into ordered row mappings.
    pub fn rows(&self) -> Vec<Row> {
        self.records
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(record.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

/// Server status information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Health status (e.g. "healthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Storage statistics
    pub storage: StorageStats,
}

/// Storage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageStats {
    /// Number of nodes
    pub nodes: u64,
    /// Number of edges
    pub edges: u64,
}
