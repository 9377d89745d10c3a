//! Typed JSON helpers over any [`DocumentStore`].

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Load and deserialize a document. `Ok(None)` when it does not exist.
pub async fn load<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
        None => Ok(None),
    }
}

/// Load a document that must exist.
pub async fn load_required<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<T, StorageError> {
    load(store, key).await?.ok_or_else(|| StorageError::NotFound {
        key: key.to_string(),
    })
}

/// Serialize and store a document, replacing whatever was there.
pub async fn save<T: Serialize>(
    store: &dyn DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body).await
}

/// Load every document under `prefix`, in key order.
///
/// A key listed but gone by the time it is read (deleted concurrently) is
/// skipped.
pub async fn load_all<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        if let Some(value) = load(store, key).await? {
            values.push(value);
        }
    }
    Ok(values)
}

/// Delete every document under `prefix`. Returns the number deleted.
pub async fn delete_prefix(store: &dyn DocumentStore, prefix: &str) -> Result<usize, StorageError> {
    let keys = store.list(prefix).await?;
    for key in &keys {
        store.delete(key).await?;
    }
    tracing::debug!(prefix, deleted = keys.len(), "deleted documents");
    Ok(keys.len())
}
