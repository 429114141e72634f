#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use quizkit_server::{AppState, router};
use quizkit_storage::{Document, DocumentStore, MemoryStore, StorageError};

pub fn app() -> axum::Router {
    router(AppState::new(Arc::new(MemoryStore::new())), None)
}

pub fn failing_app() -> axum::Router {
    router(AppState::new(Arc::new(FailingStore)), None)
}

/// Send one request and decode the JSON reply (`Value::Null` for an empty body).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("reply should be JSON")
    };
    (status, json)
}

/// A store whose backend is always down.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get(&self, _key: &str) -> Result<Document, StorageError> {
        Err(StorageError::GetObject("connection refused".into()))
    }

    async fn put(&self, _key: &str, _body: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::PutObject("connection refused".into()))
    }

    async fn put_if_match(
        &self,
        _key: &str,
        _body: Vec<u8>,
        _version: &str,
    ) -> Result<(), StorageError> {
        Err(StorageError::PutObject("connection refused".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::DeleteObject("connection refused".into()))
    }

    async fn list(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
        Err(StorageError::ListObjects("connection refused".into()))
    }
}
