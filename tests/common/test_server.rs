use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use biztime::server::{AppState, create_router};
use biztime::store::{SqliteStore, Store};

/// Drives the full router in-process against a throwaway database.
pub struct TestServer {
    pub temp_dir: TempDir,
    pub store: Arc<SqliteStore>,
    router: Router,
}

impl TestServer {
    pub fn start() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = SqliteStore::new(temp_dir.path().join("biztime.db")).expect("open store");
        store.initialize().expect("initialize schema");
        let store = Arc::new(store);

        let state = Arc::new(AppState::new(store.clone()));
        let router = create_router(state);

        Self {
            temp_dir,
            store,
            router,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Creates a company through the API and returns its code.
    pub async fn create_company(&self, code: &str, name: &str, description: &str) -> String {
        let (status, _) = self
            .post(
                "/companies",
                serde_json::json!({"code": code, "name": name, "description": description}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create company {code}");
        code.to_string()
    }

    /// Creates an invoice through the API and returns the id the store assigned.
    pub async fn create_invoice(&self, comp_code: &str, amt: f64) -> i64 {
        let (status, _) = self
            .post(
                "/invoices",
                serde_json::json!({"comp_code": comp_code, "amt": amt}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create invoice for {comp_code}");

        self.store
            .list_invoices()
            .expect("list invoices")
            .into_iter()
            .map(|i| i.id)
            .max()
            .expect("at least one invoice")
    }
}
