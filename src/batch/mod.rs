//! Batch statement execution
//!
//! Turns a flat `;`-delimited text resource into an ordered sequence of
//! statements and runs them one by one against a [`GraphClient`],
//! producing a complete per-statement report. A failing statement never
//! aborts the batch.
//!
//! [`GraphClient`]: crate::client::GraphClient

pub mod executor;

pub use executor::{execute, summarize, Outcome, Summary};

/// An ordered, immutable sequence of statements parsed from one source text.
///
/// Insertion order is execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBatch {
    statements: Vec<String>,
}

impl StatementBatch {
    /// Parse a text blob into a batch.
    ///
    /// Statements are separated by literal `;` characters. Fragments are
    /// trimmed and empty ones dropped; source order is preserved. Empty
    /// input yields an empty batch.
    ///
    /// The split is purely lexical: a `;` inside a quoted string literal
    /// splits the statement. Known limitation of the file format.
    pub fn parse(text: &str) -> Self {
        let statements = text
            .split(';')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(String::from)
            .collect();
        Self { statements }
    }

    /// Number of statements in the batch
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the batch holds no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over statements in execution order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    /// The statements in execution order
    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(StatementBatch::parse("").is_empty());
        assert!(StatementBatch::parse("  \n ; ;\t;").is_empty());
    }

    #[test]
    fn test_parse_drops_blank_fragments_and_keeps_order() {
        let batch = StatementBatch::parse("A;B;;  C ;");
        assert_eq!(batch.statements(), &["A", "B", "C"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let batch = StatementBatch::parse("\n  MATCH (n) RETURN n ;\n CREATE (:Tag)\n");
        assert_eq!(
            batch.statements(),
            &["MATCH (n) RETURN n", "CREATE (:Tag)"]
        );
    }

    #[test]
    fn test_parse_splits_inside_string_literals() {
        // Documented limitation: the split does not respect quotes.
        let batch = StatementBatch::parse("CREATE (:Note {text: 'a;b'})");
        assert_eq!(batch.len(), 2);
    }
}
