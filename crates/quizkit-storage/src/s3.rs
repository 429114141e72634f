use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;
use crate::store::{Document, DocumentStore};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Documents as JSON objects in a single S3 bucket.
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

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl DocumentStore for S3Store {
    fn name(&self) -> &str {
        "s3"
    }

    async fn get(&self, key: &str) -> Result<Document, StorageError> {
        objects::get_object(&self.client, &self.bucket, key).await
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        objects::put_object(&self.client, &self.bucket, key, body, Some(JSON_CONTENT_TYPE)).await
    }

    async fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        version: &str,
    ) -> Result<(), StorageError> {
        objects::put_object_if_match(
            &self.client,
            &self.bucket,
            key,
            body,
            Some(JSON_CONTENT_TYPE),
            version,
        )
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if !objects::object_exists(&self.client, &self.bucket, key).await? {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        objects::delete_object(&self.client, &self.bucket, key).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        keys.sort();
        Ok(keys)
    }
}
