/// Test utilities for exercising the full router against an in-memory database.
///
/// Every `TestApp` gets its own uniquely named SQLite database and a clock
/// frozen on 2025-06-14.
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::backend::domain::clock::FixedClock;
use crate::backend::domain::models::budget::BudgetConfig;
use crate::backend::storage::DbConnection;
use crate::backend::{build_app_state, create_router, cors_layer, AppState};

pub const TEST_USER: &str = "user-1";

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        let state = build_app_state(db, Arc::new(FixedClock::new(test_today())), BudgetConfig::default());
        let router = create_router(
            state.clone(),
            cors_layer("http://localhost:8080").expect("Failed to build CORS layer"),
        );
        Self { state, router }
    }

    /// Send a request as `user` (None sends no identity header) and return
    /// the status with the decoded JSON body (Null when the body is empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(TEST_USER), None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(TEST_USER), Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(TEST_USER), Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(TEST_USER), None).await
    }
}
