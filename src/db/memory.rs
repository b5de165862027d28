use super::traits::{FindingStore, StoredFinding};
use crate::types::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-process store, used for local runs without a database and in tests.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<StoredFinding>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far, in insertion order
    pub fn documents(&self) -> Vec<StoredFinding> {
        self.documents.read().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl FindingStore for MemoryStore {
    async fn insert_many(&self, documents: &[StoredFinding]) -> Result<usize> {
        self.documents.write().extend_from_slice(documents);
        Ok(documents.len())
    }

    fn collection(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FindingKind, ResearchRecord};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_insert_many_appends_in_order() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        let run_id = Uuid::new_v4();
        let docs: Vec<StoredFinding> = ["a", "b"]
            .iter()
            .map(|title| {
                StoredFinding::new(
                    ResearchRecord {
                        kind: FindingKind::JobSearch,
                        title: title.to_string(),
                        link: String::new(),
                        summary: String::new(),
                    },
                    run_id,
                )
            })
            .collect();

        assert_eq!(store.insert_many(&docs).await.unwrap(), 2);
        assert_eq!(store.insert_many(&docs[..1]).await.unwrap(), 1);

        let titles: Vec<String> = store
            .documents()
            .into_iter()
            .map(|d| d.record.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "a"]);
    }
}
