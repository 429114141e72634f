use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::store::{Document, DocumentStore};

/// Process-local document store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, Document>>,
    writes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    // Versions are never reused, even across delete and recreate.
    fn next_document(&self, body: Vec<u8>) -> Document {
        let version = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        Document {
            body,
            version: format!("m{version}"),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Document, StorageError> {
        self.documents
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let doc = self.next_document(body);
        self.documents.write().await.insert(key.to_string(), doc);
        Ok(())
    }

    async fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        version: &str,
    ) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        let current = documents.get_mut(key).ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })?;
        if current.version != version {
            return Err(StorageError::PreconditionFailed {
                key: key.to_string(),
            });
        }
        *current = self.next_document(body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.documents
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .documents
            .read()
            .await
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_only_returns_keys_under_prefix() {
        let store = MemoryStore::new();
        store.put("questions/a.json", b"{}".to_vec()).await.unwrap();
        store.put("questions/b.json", b"{}".to_vec()).await.unwrap();
        store.put("responses/x/c.json", b"{}".to_vec()).await.unwrap();

        let keys = store.list("questions/").await.unwrap();
        assert_eq!(keys, vec!["questions/a.json", "questions/b.json"]);
        assert!(store.list("quiz/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_key_is_not_found() {
        let store = MemoryStore::new();
        store.put("k", b"1".to_vec()).await.unwrap();

        store.delete("k").await.unwrap();
        assert!(matches!(
            store.delete("k").await,
            Err(StorageError::NotFound { .. })
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn conditional_put_only_applies_to_the_version_read() {
        let store = MemoryStore::new();
        store.put("k", b"1".to_vec()).await.unwrap();
        let read = store.get("k").await.unwrap();

        store.put_if_match("k", b"2".to_vec(), &read.version).await.unwrap();
        assert!(matches!(
            store.put_if_match("k", b"3".to_vec(), &read.version).await,
            Err(StorageError::PreconditionFailed { .. })
        ));
        assert_eq!(store.get("k").await.unwrap().body, b"2".to_vec());
    }

    #[tokio::test]
    async fn conditional_put_never_recreates_a_deleted_key() {
        let store = MemoryStore::new();
        store.put("k", b"1".to_vec()).await.unwrap();
        let read = store.get("k").await.unwrap();
        store.delete("k").await.unwrap();

        assert!(matches!(
            store.put_if_match("k", b"2".to_vec(), &read.version).await,
            Err(StorageError::NotFound { .. })
        ));
        assert!(store.is_empty().await);
    }
}
