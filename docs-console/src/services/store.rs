use crate::models::DocumentRecord;
use std::collections::HashSet;

/// In-memory listing of the documents the API last reported, in server order.
///
/// Identifiers are unique at all times. Records are never edited in place:
/// a refresh replaces the whole listing and a delete drops one entry.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    records: Vec<DocumentRecord>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing with a freshly fetched page. A repeated identifier
    /// keeps its first occurrence.
    pub fn replace(&mut self, records: Vec<DocumentRecord>) {
        let mut seen = HashSet::with_capacity(records.len());
        let before = records.len();
        self.records = records
            .into_iter()
            .filter(|record| seen.insert(record.doc_id.clone()))
            .collect();

        if self.records.len() != before {
            tracing::warn!(
                dropped = before - self.records.len(),
                "Document listing contained duplicate identifiers"
            );
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Drop the record with exactly this identifier, keeping the order of the
    /// rest. Unknown identifiers leave the store untouched.
    pub fn remove(&mut self, doc_id: &str) -> Option<DocumentRecord> {
        let index = self.records.iter().position(|r| r.doc_id == doc_id)?;
        Some(self.records.remove(index))
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
