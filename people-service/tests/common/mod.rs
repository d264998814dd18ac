#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use people_service::config::{MongoConfig, PeopleConfig};
use people_service::services::{InMemoryPersonStore, MongoDb, PersonStore};
use people_service::startup::{build_router, AppState, Application};
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use uuid::Uuid;

pub fn test_config() -> PeopleConfig {
    PeopleConfig {
        common: CoreConfig {
            port: 0,
            log_level: "info".to_string(),
        },
        mongodb: MongoConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("people_test_{}", Uuid::new_v4()),
            collection: "people".to_string(),
        },
        request_timeout: Duration::from_secs(10),
    }
}

pub fn person_body(first_name: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Lovelace",
        "address": "12 St James's Square, London",
        "phone_number": "+44 20 7946 0000"
    })
}

/// Router wired to an in-memory store, plus a handle on that store.
pub struct TestRouter {
    pub router: Router,
    pub store: Arc<InMemoryPersonStore>,
}

impl TestRouter {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryPersonStore::new());
        let router = Self::with_store(test_config(), store.clone());
        Self { router, store }
    }

    pub fn with_store(config: PeopleConfig, store: Arc<dyn PersonStore>) -> Router {
        build_router(AppState::new(config, store))
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(&self.router, method, uri, body).await
    }

    pub async fn create(&self, first_name: &str) -> String {
        let (status, body) = self
            .send(Method::POST, "/people", Some(person_body(first_name)))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["data"]["data"]["inserted_id"]
            .as_str()
            .expect("missing inserted_id")
            .to_string()
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

/// A people-service listening on a random port against a live MongoDB.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();
        let db_name = config.mongodb.database.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the liveness endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
