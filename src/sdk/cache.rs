// Sat Oct 17 2026 - Alex

use crate::sdk::ClassDescriptionDocument;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub loads: usize,
    pub hits: usize,
    pub clears: usize,
}

/// Loaded SDK documents for the current run. Never persisted.
pub struct DocumentCache {
    documents: HashMap<String, ClassDescriptionDocument>,
    stats: CacheStats,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&self, source_id: &str) -> Option<&ClassDescriptionDocument> {
        self.documents.get(source_id)
    }

    pub fn contains(&self, source_id: &str) -> bool {
        self.documents.contains_key(source_id)
    }

    pub fn record_hit(&mut self) {
        self.stats.hits += 1;
    }

    pub fn insert(&mut self, source_id: &str, document: ClassDescriptionDocument) {
        self.stats.loads += 1;
        self.documents.insert(source_id.to_string(), document);
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.stats.clears += 1;
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new()
    }
}
