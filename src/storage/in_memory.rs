//! In-memory implementation of DocumentSink for testing and embedding

use crate::core::{DocumentSink, RenderedDocument};
use anyhow::{Result, anyhow};
use std::sync::{Arc, RwLock};

/// In-memory document sink
///
/// Keeps every opened document in order. Clones share the same storage, so a
/// test can hand one clone to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryDocumentSink {
    documents: Arc<RwLock<Vec<RenderedDocument>>>,
}

impl InMemoryDocumentSink {
    /// Create a new in-memory document sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents opened so far, oldest first
    pub fn documents(&self) -> Result<Vec<RenderedDocument>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(documents.clone())
    }

    /// The most recently opened document
    pub fn last(&self) -> Result<Option<RenderedDocument>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(documents.last().cloned())
    }

    /// Dismiss every open document
    pub fn close_all(&self) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        documents.clear();

        Ok(())
    }
}

impl DocumentSink for InMemoryDocumentSink {
    fn open(&self, document: RenderedDocument) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        documents.push(document);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_keeps_documents_in_order() {
        let sink = InMemoryDocumentSink::new();

        sink.open(RenderedDocument::new("first", "<p>1</p>")).unwrap();
        sink.open(RenderedDocument::new("second", "<p>2</p>")).unwrap();

        let documents = sink.documents().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].title, "first");
        assert_eq!(sink.last().unwrap().unwrap().title, "second");
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = InMemoryDocumentSink::new();
        let handle = sink.clone();

        handle.open(RenderedDocument::new("doc", "<p></p>")).unwrap();

        assert_eq!(sink.documents().unwrap().len(), 1);
    }

    #[test]
    fn test_close_all() {
        let sink = InMemoryDocumentSink::new();
        sink.open(RenderedDocument::new("doc", "<p></p>")).unwrap();

        sink.close_all().unwrap();

        assert!(sink.last().unwrap().is_none());
    }
}
