#![allow(dead_code)]

/// Common test utilities for API integration tests
///
/// - `TestContext`: router over an in-memory store, with a call counter on
///   the store so tests can assert data access never happened
/// - Request builders and response body helpers

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use userdesk_api::app::{build_router, AppState};
use userdesk_api::config::Config;
use userdesk_shared::models::user::{CreateUser, UpdateUser, User};
use userdesk_shared::store::{MemoryUserStore, StoreError, StoreResult, UserStore};

/// Wraps a store and counts every data-access call
pub struct CountingStore<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<S: UserStore> UserStore for CountingStore<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        self.record();
        self.inner.list().await
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        self.record();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, data: CreateUser) -> StoreResult<User> {
        self.record();
        self.inner.create(data).await
    }

    async fn update(&self, id: i64, data: UpdateUser) -> StoreResult<Option<User>> {
        self.record();
        self.inner.update(id, data).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.record();
        self.inner.delete(id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}

/// Store whose every operation fails, for server-error paths
pub struct BrokenStore;

#[async_trait]
impl UserStore for BrokenStore {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<User>> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn create(&self, _data: CreateUser) -> StoreResult<User> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn update(&self, _id: i64, _data: UpdateUser) -> StoreResult<Option<User>> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete(&self, _id: i64) -> StoreResult<bool> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

/// Test context containing the router and its store
pub struct TestContext {
    pub app: axum::Router,
    pub store: Arc<CountingStore<MemoryUserStore>>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(CountingStore::new(MemoryUserStore::new()));
        let state = AppState::new(store.clone(), Config::default());

        TestContext {
            app: build_router(state),
            store,
        }
    }

    /// Sends a request through a fresh clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Creates a user through the API and returns the decoded response
    pub async fn create_user(&self, payload: serde_json::Value) -> User {
        let response = self.send(json_request("POST", "/users", payload)).await;
        assert_eq!(response.status(), 201);
        body_json(response).await
    }
}

/// Builds a request with a JSON body
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request without a body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
