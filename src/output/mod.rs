// Sat Oct 17 2026 - Alex

pub mod json;
pub mod report;

pub use json::JsonWriter;
pub use report::{ReportFormat, ReportGenerator};

use crate::request::LookupRequest;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved values keyed by `<class>.<key>` / `<class>.Size`, in the order
/// they were first resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    entries: IndexMap<String, u64>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated key takes the new value but keeps its original position.
    pub fn insert(&mut self, key: String, value: u64) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of a batch: the table that gets written plus the requests that
/// resolved to nothing.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub table: ResultTable,
    pub unresolved: Vec<LookupRequest>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolved_count(&self) -> usize {
        self.table.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keeps_first_position() {
        let mut table = ResultTable::new();
        table.insert("Player.Health".to_string(), 0x10);
        table.insert("Player.Size".to_string(), 4);
        table.insert("Player.Health".to_string(), 0x18);

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Player.Health", "Player.Size"]);
        assert_eq!(table.get("Player.Health"), Some(0x18));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_serializes_as_flat_object() {
        let mut table = ResultTable::new();
        table.insert("B.Size".to_string(), 8);
        table.insert("A.Field".to_string(), 2);
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"B.Size":8,"A.Field":2}"#);
    }
}
