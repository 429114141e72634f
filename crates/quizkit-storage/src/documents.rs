use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Load and deserialize a JSON document.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<T, StorageError> {
    let (value, _) = load_json_versioned(store, key).await?;
    Ok(value)
}

/// Load a JSON document together with the version it was read at.
pub async fn load_json_versioned<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<(T, String), StorageError> {
    let doc = store.get(key).await?;
    Ok((serde_json::from_slice(&doc.body)?, doc.version))
}

/// Serialize and save a JSON document.
pub async fn save_json<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body).await
}

/// Save a JSON document only if it is still at `version`.
pub async fn save_json_if_match<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    key: &str,
    value: &T,
    version: &str,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put_if_match(key, body, version).await
}

/// Load every document under `prefix`.
///
/// Keys that disappear between listing and loading (a concurrent delete) are
/// skipped rather than failing the whole listing.
pub async fn load_all<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        match load_json(store, key).await {
            Ok(value) => values.push(value),
            Err(StorageError::NotFound { key }) => {
                tracing::debug!(%key, "document vanished during listing");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}
