use async_trait::async_trait;

use crate::error::StorageError;

/// A stored document and the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub body: Vec<u8>,
    /// Opaque version tag (the ETag on S3). Changes on every write.
    pub version: String,
}

/// A flat key/value store of JSON documents.
///
/// Plain writes are last-write-wins. [`DocumentStore::put_if_match`] lets a
/// read-modify-write fail instead of clobbering a concurrent change.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable backend name (e.g. "s3").
    fn name(&self) -> &str;

    /// Fetch a document. `StorageError::NotFound` if the key is absent.
    async fn get(&self, key: &str) -> Result<Document, StorageError>;

    /// Create or overwrite a document.
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError>;

    /// Overwrite a document only if it is still at `version`.
    ///
    /// `StorageError::NotFound` if the key is gone, `PreconditionFailed` if it
    /// was written since. Never creates a document.
    async fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        version: &str,
    ) -> Result<(), StorageError>;

    /// Remove a document. `StorageError::NotFound` if the key is absent.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Keys starting with `prefix`, in lexicographic order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
