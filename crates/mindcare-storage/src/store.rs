use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;

/// Key/value store of JSON documents.
///
/// Keys are `/`-separated paths. `list` returns keys in lexicographic order.
/// Writes are unconditional; concurrent writers to one key race and the last
/// one wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document. `Ok(None)` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError>;

    /// Delete a document. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

pub type SharedStore = Arc<dyn DocumentStore>;

/// [`DocumentStore`] backed by one S3 bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for S3Store {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match objects::get_object(&self.client, &self.bucket, key).await {
            Ok(body) => Ok(Some(body)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        objects::put_object(
            &self.client,
            &self.bucket,
            key,
            body,
            Some("application/json"),
        )
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        objects::delete_object(&self.client, &self.bucket, key).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        objects::list_objects(&self.client, &self.bucket, prefix).await
    }
}
